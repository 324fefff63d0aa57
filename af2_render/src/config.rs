//! Optional TOML configuration for the renderer.
//!
//! Same keys as the page's inline JSON config:
//!
//! ```toml
//! hits_threshold = 15
//! report_page_prefix = "/company/"
//! ```

use std::path::Path;

use af2_report::ViewerConfig;
use anyhow::{Context, Result};

/// Load `path` if given, otherwise the defaults.
pub fn load(path: Option<&Path>) -> Result<ViewerConfig> {
    let Some(path) = path else {
        return Ok(ViewerConfig::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn no_path_gives_defaults() {
        let config = load(None).expect("defaults");
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "hits_threshold = 15").expect("write config");

        let config = load(Some(file.path())).expect("valid config");
        assert_eq!(config.hits_threshold, 15);
        assert_eq!(config.refresh_seconds, 10);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "hits_threshold = \"many\"").expect("write config");

        let err = load(Some(file.path())).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load(Some(Path::new("/nonexistent/af2.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
