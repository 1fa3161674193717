//! Generic enable/show/load behavior shared by all catalog items.

/// Items that may take time to produce their renderable object.
pub trait Loadable {
    fn is_loading(&self) -> bool;
    fn begin_loading(&mut self);
    fn finish_loading(&mut self);
}

/// Items that can be put on and taken off the map.
pub trait Showable {
    fn is_shown(&self) -> bool;
    fn show(&mut self);
    fn hide(&mut self);
}

/// State every catalog item moves through, driven by the hosting
/// application. Items hold one of these and delegate to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lifecycle {
    enabled: bool,
    shown: bool,
    loading: bool,
}

impl Lifecycle {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        if !self.enabled {
            log::trace!("Catalog item enabled.");
        }
        self.enabled = true;
    }

    /// Disabling also takes the item off the map.
    pub fn disable(&mut self) {
        if self.enabled {
            log::trace!("Catalog item disabled.");
        }
        self.shown = false;
        self.enabled = false;
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn show(&mut self) {
        if !self.shown {
            log::trace!("Catalog item shown.");
        }
        self.shown = true;
    }

    pub fn hide(&mut self) {
        if self.shown {
            log::trace!("Catalog item hidden.");
        }
        self.shown = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }
}
