//! Configuration storage adapters

mod xdg;

pub use xdg::XdgConfigStore;

use std::path::PathBuf;

/// Directory holding rainbow's config and remembered permissions
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("rainbow")
}
