//! Connection parameters handed over to a tiled imagery engine.
//!
//! The engine itself lives outside this crate, behind
//! [`ImageryProviderFactory`]. A catalog item packages its current
//! configuration into [`ImageryProviderOptions`] and takes whatever the
//! factory returns as-is.

use serde::{Deserialize, Serialize};

use crate::catalog::Credit;
use crate::extent::Extent;
use crate::proxy::ProxyError;

/// Response format to try for a feature info query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureInfoFormat {
    Json,
    Xml,
    Html,
    Text,
}

/// Rule for detecting and discarding "missing tile" placeholder images.
/// Carried through to the engine untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileDiscardPolicy {
    /// Url of a known placeholder image to compare downloaded tiles against.
    pub missing_image_url: String,
    /// Pixels sampled for the comparison.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pixels_to_check: Vec<(u32, u32)>,
}

/// Everything a tiled imagery engine needs to start serving a layer.
///
/// Optional fields left `None` were never configured; the engine picks its
/// own defaults for those.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageryProviderOptions {
    /// Tile URL template, already routed through the proxy resolver.
    pub url: String,
    pub maximum_level: u32,
    pub minimum_level: u32,
    pub credit: Option<Credit>,
    /// Round-robin subdomain tokens, in rotation order.
    pub subdomains: Option<Vec<String>>,
    pub pick_features_url: Option<String>,
    /// Formats to attempt for feature info queries, in order.
    pub get_feature_info_formats: Option<Vec<FeatureInfoFormat>>,
    pub tile_discard_policy: Option<TileDiscardPolicy>,
    pub rectangle: Option<Extent>,
}

/// Constructor side of the tiled imagery engine.
pub trait ImageryProviderFactory {
    type Provider;

    fn create(&self, options: ImageryProviderOptions) -> Result<Self::Provider, ProviderError>;
}

/// Failure of the provider construction path.
#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    /// The layer was asked for a provider before its url was configured.
    #[error("layer has no url configured")]
    MissingUrl,
    #[error(transparent)]
    Proxy(#[from] ProxyError),
    /// The engine's constructor did not accept the configuration.
    #[error("provider rejected configuration: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_info_formats_persist_lowercase() {
        let json =
            serde_json::to_string(&[FeatureInfoFormat::Json, FeatureInfoFormat::Xml]).unwrap();
        assert_eq!(json, r#"["json","xml"]"#);
    }

    #[test]
    fn discard_policy_round_trips_through_camel_case() {
        let policy = TileDiscardPolicy {
            missing_image_url: "https://tiles.example.com/missing.png".to_string(),
            pixels_to_check: vec![(0, 0), (255, 255)],
        };

        let json = serde_json::to_string(&policy).unwrap();
        assert!(json.contains("missingImageUrl"));
        assert_eq!(serde_json::from_str::<TileDiscardPolicy>(&json).unwrap(), policy);
    }

    #[test]
    fn missing_url_error_is_descriptive() {
        assert_eq!(
            ProviderError::MissingUrl.to_string(),
            "layer has no url configured"
        );
    }
}
