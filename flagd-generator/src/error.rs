use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("failed to serialize flag document: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
