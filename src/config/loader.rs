//! Loading params documents from disk

use super::schema::ParamsDocument;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Parse a params document from YAML or JSON text.
pub fn parse_params(content: &str) -> Result<ParamsDocument> {
    let document: ParamsDocument = serde_yaml::from_str(content)?;
    Ok(document)
}

/// Load a params document from a YAML or JSON file.
///
/// # Example
///
/// ```no_run
/// use lrpreview::config::load_params;
///
/// let document = load_params("params.yaml")?;
/// let request = document.training.to_request()?;
/// # Ok::<(), lrpreview::Error>(())
/// ```
pub fn load_params<P: AsRef<Path>>(path: P) -> Result<ParamsDocument> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    let document = parse_params(&content)?;
    tracing::debug!(path = %path.display(), "Loaded params document");
    Ok(document)
}
