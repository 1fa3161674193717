//! URL rewriting for cross-origin tile requests.
//!
//! Some hosts cannot fetch tiles straight from the mapping server (CORS,
//! mixed content). A [`ProxyResolver`] decides, per item and per URL, what
//! to actually fetch from. Resolution is a synchronous rewrite decision, not
//! a network call.

use crate::catalog::LayerBase;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProxyError {
    /// The url has no scheme/host part to route through the proxy.
    #[error("url '{0}' cannot be routed through a proxy")]
    NotProxyable(String),
}

/// Rewrites raw URLs into ones that are safe to fetch from the current
/// execution context. The returned URL is used verbatim.
pub trait ProxyResolver: Send + Sync {
    fn resolve(&self, item: &LayerBase, raw_url: &str) -> Result<String, ProxyError>;
}

/// Passes every url through unchanged.
#[derive(Debug, Default)]
pub struct DirectResolver;

impl ProxyResolver for DirectResolver {
    fn resolve(&self, _item: &LayerBase, raw_url: &str) -> Result<String, ProxyError> {
        Ok(raw_url.to_string())
    }
}

/// Routes requests through a same-origin proxy endpoint:
/// `https://tiles.example.com/{z}/{x}/{y}.png` becomes
/// `<prefix>/tiles.example.com/{z}/{x}/{y}.png`.
#[derive(Debug)]
pub struct PrefixProxy {
    prefix: String,
}

impl PrefixProxy {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl ProxyResolver for PrefixProxy {
    fn resolve(&self, _item: &LayerBase, raw_url: &str) -> Result<String, ProxyError> {
        let (_scheme, rest) = raw_url
            .split_once("://")
            .ok_or_else(|| ProxyError::NotProxyable(raw_url.to_string()))?;
        Ok(format!("{}/{}", self.prefix.trim_end_matches('/'), rest))
    }
}
