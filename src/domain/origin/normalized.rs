//! Origin value object

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::domain::error::OriginError;

/// A requesting origin in `scheme://hostname[:port]` form.
///
/// The port is kept only when the location spells out a non-default port,
/// so `http://localhost:80/page` and `http://localhost` share one origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Origin(String);

impl Origin {
    /// Reduce a full location (URL) to its origin
    pub fn parse(location: &str) -> Result<Self, OriginError> {
        let url = Url::parse(location.trim()).map_err(|e| OriginError::InvalidUrl {
            input: location.to_string(),
            message: e.to_string(),
        })?;
        Self::from_url(&url)
    }

    /// Build an origin from an already parsed URL
    pub fn from_url(url: &Url) -> Result<Self, OriginError> {
        let host = url
            .host_str()
            .ok_or_else(|| OriginError::MissingHost(url.to_string()))?;

        let mut origin = format!("{}://{}", url.scheme(), host);
        if let Some(port) = url.port() {
            origin.push(':');
            origin.push_str(&port.to_string());
        }
        Ok(Self(origin))
    }

    /// Get the normalized string form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Origin {
    type Err = OriginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Origin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
