//! Requesting origins and the always-trusted allowlist

mod allowlist;
mod normalized;

pub use allowlist::{AllowedDomains, DEFAULT_ALLOWED_DOMAINS};
pub use normalized::Origin;
