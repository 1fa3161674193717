//! A layer from a mapping server that can be reached via a URL template.

use serde::{Deserialize, Serialize};

use super::{CatalogItem, Credit, LayerBase};
use crate::extent::Extent;
use crate::imagery::{
    FeatureInfoFormat, ImageryProviderFactory, ImageryProviderOptions, ProviderError,
    TileDiscardPolicy,
};
use crate::observable::{Property, PropertyEvents};

/// Catalog item whose tiles come from a URL template such as
/// `https://tiles.example.com/{z}/{x}/{y}.png`.
///
/// The item only holds configuration. Translating it into something that
/// actually fetches tiles happens in [`Self::create_imagery_provider`], each
/// time from the values current at that moment.
pub struct UrlTemplateLayer {
    base: LayerBase,
    minimum_level: u32,
    maximum_level: u32,
    attribution: Option<Credit>,
    subdomains: Option<Vec<String>>,
    tile_discard_policy: Option<TileDiscardPolicy>,
    pick_features_url: Option<String>,
    get_feature_info_formats: Option<Vec<FeatureInfoFormat>>,
}

impl UrlTemplateLayer {
    pub const KIND: &'static str = "url-template";
    pub const KIND_NAME: &'static str = "URL Template Map Server";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: LayerBase::new(name),
            minimum_level: 0,
            maximum_level: 25,
            attribution: None,
            subdomains: None,
            tile_discard_policy: None,
            pick_features_url: None,
            get_feature_info_formats: None,
        }
    }

    /// Build the layer from its persisted form.
    pub fn from_definition(definition: UrlTemplateLayerDefinition) -> Self {
        let mut layer = Self::new(definition.name);
        layer.base.set_description(definition.description);
        layer.base.set_url(definition.url);
        layer.base.set_rectangle(definition.rectangle);
        if let Some(opacity) = definition.opacity {
            layer.base.set_opacity(opacity);
        }
        if let Some(level) = definition.minimum_level {
            layer.minimum_level = level;
        }
        if let Some(level) = definition.maximum_level {
            layer.maximum_level = level;
        }
        layer.attribution = definition.attribution;
        layer.subdomains = definition.subdomains;
        layer.tile_discard_policy = definition.tile_discard_policy;
        layer.pick_features_url = definition.pick_features_url;
        layer.get_feature_info_formats = definition.get_feature_info_formats;
        layer
    }

    /// The persisted form of the current configuration.
    pub fn definition(&self) -> UrlTemplateLayerDefinition {
        UrlTemplateLayerDefinition {
            name: self.base.name().to_owned(),
            description: self.base.description().map(ToOwned::to_owned),
            url: self.base.url().map(ToOwned::to_owned),
            rectangle: self.base.rectangle(),
            opacity: Some(self.base.opacity()),
            minimum_level: Some(self.minimum_level),
            maximum_level: Some(self.maximum_level),
            attribution: self.attribution.clone(),
            subdomains: self.subdomains.clone(),
            tile_discard_policy: self.tile_discard_policy.clone(),
            pick_features_url: self.pick_features_url.clone(),
            get_feature_info_formats: self.get_feature_info_formats.clone(),
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.base.url()
    }

    pub fn set_url(&mut self, url: Option<String>) {
        self.base.set_url(url);
    }

    pub fn rectangle(&self) -> Option<Extent> {
        self.base.rectangle()
    }

    pub fn set_rectangle(&mut self, rectangle: Option<Extent>) {
        self.base.set_rectangle(rectangle);
    }

    /// Lowest zoom level tiles will be requested for.
    pub fn minimum_level(&self) -> u32 {
        self.minimum_level
    }

    pub fn set_minimum_level(&mut self, level: u32) {
        self.minimum_level = level;
        self.base.publish(Property::MinimumLevel);
    }

    /// Highest zoom level tiles will be requested for. Keeping this at or
    /// above the minimum level is the caller's responsibility.
    pub fn maximum_level(&self) -> u32 {
        self.maximum_level
    }

    pub fn set_maximum_level(&mut self, level: u32) {
        self.maximum_level = level;
        self.base.publish(Property::MaximumLevel);
    }

    pub fn attribution(&self) -> Option<&Credit> {
        self.attribution.as_ref()
    }

    pub fn set_attribution(&mut self, attribution: Option<Credit>) {
        self.attribution = attribution;
        self.base.publish(Property::Attribution);
    }

    /// Round-robin subdomain tokens substituted into the template, in
    /// rotation order.
    pub fn subdomains(&self) -> Option<&[String]> {
        self.subdomains.as_deref()
    }

    pub fn set_subdomains(&mut self, subdomains: Option<Vec<String>>) {
        self.subdomains = subdomains;
        self.base.publish(Property::Subdomains);
    }

    pub fn tile_discard_policy(&self) -> Option<&TileDiscardPolicy> {
        self.tile_discard_policy.as_ref()
    }

    pub fn set_tile_discard_policy(&mut self, policy: Option<TileDiscardPolicy>) {
        self.tile_discard_policy = policy;
        self.base.publish(Property::TileDiscardPolicy);
    }

    pub fn pick_features_url(&self) -> Option<&str> {
        self.pick_features_url.as_deref()
    }

    pub fn set_pick_features_url(&mut self, url: Option<String>) {
        self.pick_features_url = url;
        self.base.publish(Property::PickFeaturesUrl);
    }

    /// Formats to attempt for feature info queries, in order.
    pub fn get_feature_info_formats(&self) -> Option<&[FeatureInfoFormat]> {
        self.get_feature_info_formats.as_deref()
    }

    pub fn set_get_feature_info_formats(&mut self, formats: Option<Vec<FeatureInfoFormat>>) {
        self.get_feature_info_formats = formats;
        self.base.publish(Property::GetFeatureInfoFormats);
    }

    /// Subscribe to change notifications for this layer's properties.
    pub fn subscribe(&mut self) -> PropertyEvents {
        self.base.subscribe()
    }

    /// Translate the current configuration into a provider built by
    /// `factory`.
    ///
    /// The fetch URL is routed through the item's proxy resolver first;
    /// everything else is handed over untouched, with unset attributes left
    /// for the engine to default. Nothing is cached, so every call reflects
    /// the configuration at that moment.
    pub fn create_imagery_provider<F>(&self, factory: &F) -> Result<F::Provider, ProviderError>
    where
        F: ImageryProviderFactory,
    {
        let url = self.base.url().ok_or(ProviderError::MissingUrl)?;
        let url = self.base.resolver().resolve(&self.base, url)?;

        log::debug!("Creating imagery provider for '{}' from {}.", self.base.name(), url);

        factory.create(ImageryProviderOptions {
            url,
            maximum_level: self.maximum_level,
            minimum_level: self.minimum_level,
            credit: self.attribution.clone(),
            subdomains: self.subdomains.clone(),
            pick_features_url: self.pick_features_url.clone(),
            get_feature_info_formats: self.get_feature_info_formats.clone(),
            tile_discard_policy: self.tile_discard_policy.clone(),
            rectangle: self.base.rectangle(),
        })
    }
}

impl CatalogItem for UrlTemplateLayer {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn kind_name(&self) -> &'static str {
        Self::KIND_NAME
    }

    fn base(&self) -> &LayerBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut LayerBase {
        &mut self.base
    }
}

/// Persistable form of [`UrlTemplateLayer`], as stored in catalog files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UrlTemplateLayerDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rectangle: Option<Extent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<Credit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_discard_policy: Option<TileDiscardPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pick_features_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_feature_info_formats: Option<Vec<FeatureInfoFormat>>,
}
