use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct Conf {
    pub version: u8,
    /// Default video source when no `--source` flag is given: device index,
    /// file path, or stream URI.
    pub source: String,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            version: 1,
            source: "0".into(),
        }
    }
}

/// Loads the settings file from the given path, or from the default
/// application profile when none is given. A missing file yields the
/// defaults; a malformed one is an error.
pub fn load(path: Option<&Path>) -> Result<Conf> {
    let cfg = match path {
        Some(path) => {
            debug!("Using config file: {}", path.display());
            confy::load_path(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?
        }
        None => confy::load("filterscope", None).context("Failed to load configuration")?,
    };

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_source_is_the_first_camera() {
        let cfg = Conf::default();
        assert_eq!(cfg.source, "0");
        assert_eq!(cfg.version, 1);
    }
}
