//! Reading and writing model tables as RON or JSON files

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ron::ser::PrettyConfig;

use crate::error::{NamesError, Result};
use crate::registry::ModelRegistry;
use crate::table::Model;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Ron,
    Json,
}

impl TableFormat {
    /// Format implied by the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| NamesError::UnsupportedFormat(path.display().to_string()))?;
        ext.parse()
    }
}

impl FromStr for TableFormat {
    type Err = NamesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ron" => Ok(TableFormat::Ron),
            "json" => Ok(TableFormat::Json),
            other => Err(NamesError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableFormat::Ron => f.write_str("ron"),
            TableFormat::Json => f.write_str("json"),
        }
    }
}

pub fn parse_model(text: &str, format: TableFormat) -> Result<Model> {
    let model: Model = match format {
        TableFormat::Ron => ron::from_str(text)?,
        TableFormat::Json => serde_json::from_str(text)?,
    };
    Ok(model)
}

pub fn render_model(model: &Model, format: TableFormat) -> Result<String> {
    let text = match format {
        TableFormat::Ron => ron::ser::to_string_pretty(model, PrettyConfig::default())?,
        TableFormat::Json => serde_json::to_string_pretty(model)?,
    };
    Ok(text)
}

pub fn load_model(path: &Path) -> Result<Model> {
    let format = TableFormat::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|source| NamesError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let model = parse_model(&text, format)?;
    tracing::info!(
        path = %path.display(),
        model = model.name(),
        entries = model.len(),
        "loaded model table"
    );
    Ok(model)
}

/// Comma separated table paths, as found in `MODEL_NAMES_TABLES`. Blank
/// segments are skipped, so an empty value means no extra tables.
pub fn split_table_paths(value: &str) -> Vec<PathBuf> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Built-in models (optionally) followed by one model per file.
pub fn load_registry<P: AsRef<Path>>(paths: &[P], include_builtin: bool) -> Result<ModelRegistry> {
    let mut registry = if include_builtin {
        ModelRegistry::builtin()
    } else {
        ModelRegistry::new()
    };
    for path in paths {
        registry.insert(load_model(path.as_ref())?)?;
    }
    Ok(registry)
}
