//! Change notification for catalog item properties.
//!
//! Every setter of a catalog item announces the property it touched on the
//! item's [`PropertyBus`]. Subscribers get their own channel and drain it
//! whenever it suits them, so bound UI controls and dependent computations
//! can stay consistent without polling the item itself.

use futures::channel::mpsc;

/// One configurable property of a catalog item.
///
/// The set is fixed per item kind; [`Property::ALL`] is the descriptor table
/// enumerating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Name,
    Description,
    Url,
    Rectangle,
    Opacity,
    MinimumLevel,
    MaximumLevel,
    Attribution,
    Subdomains,
    TileDiscardPolicy,
    PickFeaturesUrl,
    GetFeatureInfoFormats,
}

impl Property {
    /// Every property, in catalog file order.
    pub const ALL: &'static [Self] = &[
        Self::Name,
        Self::Description,
        Self::Url,
        Self::Rectangle,
        Self::Opacity,
        Self::MinimumLevel,
        Self::MaximumLevel,
        Self::Attribution,
        Self::Subdomains,
        Self::TileDiscardPolicy,
        Self::PickFeaturesUrl,
        Self::GetFeatureInfoFormats,
    ];

    /// Key under which the property is persisted in catalog files.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Url => "url",
            Self::Rectangle => "rectangle",
            Self::Opacity => "opacity",
            Self::MinimumLevel => "minimumLevel",
            Self::MaximumLevel => "maximumLevel",
            Self::Attribution => "attribution",
            Self::Subdomains => "subdomains",
            Self::TileDiscardPolicy => "tileDiscardPolicy",
            Self::PickFeaturesUrl => "pickFeaturesUrl",
            Self::GetFeatureInfoFormats => "getFeatureInfoFormats",
        }
    }
}

/// Receiving end of a subscription, to be drained with `try_next`.
pub type PropertyEvents = mpsc::UnboundedReceiver<Property>;

/// Fans property changes out to all live subscribers.
#[derive(Default)]
pub struct PropertyBus {
    subscribers: Vec<mpsc::UnboundedSender<Property>>,
}

impl PropertyBus {
    pub fn subscribe(&mut self) -> PropertyEvents {
        let (tx, rx) = mpsc::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Announce an assignment to `property`. Fires on every assignment, even
    /// when the new value equals the old one.
    pub fn publish(&mut self, property: Property) {
        self.subscribers
            .retain(|subscriber| subscriber.unbounded_send(property).is_ok());
    }
}
