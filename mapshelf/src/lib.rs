#![doc = include_str!("../README.md")]
#![deny(clippy::unwrap_used, rustdoc::broken_intra_doc_links)]

mod catalog;
mod extent;
mod imagery;
mod lifecycle;
mod observable;
mod proxy;

pub use catalog::{
    CatalogItem, Credit, LayerBase, LayerDefinition, UrlTemplateLayer, UrlTemplateLayerDefinition,
};
pub use extent::{extent, Extent};
pub use imagery::{
    FeatureInfoFormat, ImageryProviderFactory, ImageryProviderOptions, ProviderError,
    TileDiscardPolicy,
};
pub use lifecycle::{Lifecycle, Loadable, Showable};
pub use observable::{Property, PropertyBus, PropertyEvents};
pub use proxy::{DirectResolver, PrefixProxy, ProxyError, ProxyResolver};
