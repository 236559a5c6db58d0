use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::GeneratorError;
use crate::flag_models::FlagsDocument;

pub const DEFAULT_OUTPUT_PATH: &str = "flags.json";

pub fn render(document: &FlagsDocument) -> Result<String, GeneratorError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Writes the document as indented JSON, replacing whatever is at `path`.
pub fn write_document(document: &FlagsDocument, path: &Path) -> Result<(), GeneratorError> {
    let rendered = render(document)?;
    fs::write(path, rendered).map_err(|source| GeneratorError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        flags = document.flags.len(),
        "wrote flag configuration"
    );
    Ok(())
}
