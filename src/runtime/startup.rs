use crate::catalog::{self, Catalog};
use crate::config;

/// Resolve the session catalog: the configured TOML file when present,
/// otherwise the built-in playlist.
pub fn resolve_catalog(settings: &config::Settings) -> Catalog {
    if let Some(path) = &settings.catalog.path {
        match catalog::from_path(path) {
            Ok(c) => return c,
            Err(e) => {
                // The catalog file is optional; fall back like a missing config.
                eprintln!(
                    "musicflow: failed to load catalog {}: {e}; using built-in playlist",
                    path.display()
                );
            }
        }
    }

    catalog::builtin()
}
