//! Catalog items, the addable map layers of the data source tree.

mod url_template;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use url_template::{UrlTemplateLayer, UrlTemplateLayerDefinition};

use crate::extent::Extent;
use crate::lifecycle::{Lifecycle, Loadable, Showable};
use crate::observable::{Property, PropertyBus, PropertyEvents};
use crate::proxy::{DirectResolver, ProxyResolver};

/// Data credit displayed alongside a layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Credit {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
        }
    }
}

/// One node of the data source tree, representing a single addable map
/// layer.
pub trait CatalogItem {
    /// Constant identifier of this kind of item, used for polymorphic
    /// dispatch. Persisted as the `type` field of catalog files.
    fn kind(&self) -> &'static str;

    /// Human-readable label of this kind of data source.
    fn kind_name(&self) -> &'static str;

    fn base(&self) -> &LayerBase;

    fn base_mut(&mut self) -> &mut LayerBase;
}

impl<T: CatalogItem> Showable for T {
    fn is_shown(&self) -> bool {
        self.base().lifecycle().is_shown()
    }

    fn show(&mut self) {
        self.base_mut().lifecycle_mut().show();
    }

    fn hide(&mut self) {
        self.base_mut().lifecycle_mut().hide();
    }
}

impl<T: CatalogItem> Loadable for T {
    fn is_loading(&self) -> bool {
        self.base().lifecycle().is_loading()
    }

    fn begin_loading(&mut self) {
        self.base_mut().lifecycle_mut().begin_loading();
    }

    fn finish_loading(&mut self) {
        self.base_mut().lifecycle_mut().finish_loading();
    }
}

/// State every catalog item shares: identity, spatial extent, lifecycle,
/// change notification and the proxy used to reach its server.
pub struct LayerBase {
    name: String,
    description: Option<String>,
    url: Option<String>,
    rectangle: Option<Extent>,
    opacity: f64,
    lifecycle: Lifecycle,
    bus: PropertyBus,
    resolver: Arc<dyn ProxyResolver>,
}

impl LayerBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            url: None,
            rectangle: None,
            opacity: 0.6,
            lifecycle: Lifecycle::default(),
            bus: PropertyBus::default(),
            resolver: Arc::new(DirectResolver),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.bus.publish(Property::Name);
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.bus.publish(Property::Description);
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_url(&mut self, url: Option<String>) {
        self.url = url;
        self.bus.publish(Property::Url);
    }

    pub fn rectangle(&self) -> Option<Extent> {
        self.rectangle
    }

    pub fn set_rectangle(&mut self, rectangle: Option<Extent>) {
        self.rectangle = rectangle;
        self.bus.publish(Property::Rectangle);
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
        self.bus.publish(Property::Opacity);
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    /// Subscribe to change notifications for this item's properties.
    pub fn subscribe(&mut self) -> PropertyEvents {
        self.bus.subscribe()
    }

    pub(crate) fn publish(&mut self, property: Property) {
        self.bus.publish(property);
    }

    pub fn resolver(&self) -> &dyn ProxyResolver {
        self.resolver.as_ref()
    }

    /// Replace the proxy resolver consulted when constructing providers.
    pub fn set_proxy_resolver(&mut self, resolver: Arc<dyn ProxyResolver>) {
        self.resolver = resolver;
    }
}

/// One entry of a catalog file; the `type` field selects the concrete item
/// kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LayerDefinition {
    #[serde(rename = "url-template")]
    UrlTemplate(UrlTemplateLayerDefinition),
}

impl LayerDefinition {
    /// The kind discriminator this definition carries.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UrlTemplate(_) => UrlTemplateLayer::KIND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_base_has_the_imagery_layer_defaults() {
        let base = LayerBase::new("Clouds");

        assert_eq!(base.name(), "Clouds");
        assert_eq!(base.url(), None);
        assert_eq!(base.rectangle(), None);
        approx::assert_relative_eq!(base.opacity(), 0.6);
    }

    #[test]
    fn url_assignment_notifies_even_when_unchanged() {
        let mut base = LayerBase::new("Clouds");
        let mut events = base.subscribe();

        base.set_url(Some("https://tiles.example.com/{z}/{x}/{y}.png".to_string()));
        base.set_url(Some("https://tiles.example.com/{z}/{x}/{y}.png".to_string()));

        assert_eq!(events.try_next().unwrap(), Some(Property::Url));
        assert_eq!(events.try_next().unwrap(), Some(Property::Url));
        assert!(events.try_next().is_err());
    }

    #[test]
    fn credit_without_url_persists_as_text_only() {
        let json = serde_json::to_string(&Credit::new("OpenStreetMap contributors")).unwrap();
        assert_eq!(json, r#"{"text":"OpenStreetMap contributors"}"#);
    }

    #[test]
    fn definition_kind_matches_the_serialized_tag() {
        let definition = LayerDefinition::UrlTemplate(UrlTemplateLayerDefinition {
            name: "Clouds".to_string(),
            ..Default::default()
        });

        assert_eq!(definition.kind(), "url-template");

        let json = serde_json::to_value(&definition).unwrap();
        assert_eq!(json["type"], "url-template");
        assert_eq!(json["name"], "Clouds");
    }

    #[test]
    fn unknown_kinds_are_rejected() {
        let result = serde_json::from_str::<LayerDefinition>(
            r#"{"type": "wms", "name": "Clouds", "url": "https://wms.example.com"}"#,
        );
        assert!(result.is_err());
    }
}
