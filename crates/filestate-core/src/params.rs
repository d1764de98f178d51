//! Format-agnostic loading of host parameter files

use std::path::Path;

use crate::{Error, ModuleParams, Result, io};

/// Loads [`ModuleParams`] from a parameter file.
///
/// Format is detected from the file extension:
/// - `.json` -> JSON
/// - `.yaml`, `.yml` -> YAML
/// - `.toml` -> TOML
#[derive(Debug, Default)]
pub struct ParamsLoader;

impl ParamsLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a parameter file.
    pub fn load(&self, path: &Path) -> Result<ModuleParams> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        // Reject before touching the file so an unknown format never reads it.
        if !matches!(extension.as_str(), "json" | "yaml" | "yml" | "toml") {
            return Err(Error::UnsupportedFormat { extension });
        }

        let text = io::read_text(path)?;
        self.parse(path, &extension, &text)
    }

    fn parse(&self, path: &Path, extension: &str, text: &str) -> Result<ModuleParams> {
        let parse_error = |format: &str, message: String| Error::ParamsParse {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        };

        match extension {
            "json" => serde_json::from_str(text).map_err(|e| parse_error("JSON", e.to_string())),
            "yaml" | "yml" => {
                serde_yaml::from_str(text).map_err(|e| parse_error("YAML", e.to_string()))
            }
            "toml" => toml::from_str(text).map_err(|e| parse_error("TOML", e.to_string())),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }
}
