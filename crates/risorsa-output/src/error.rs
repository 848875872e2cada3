use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to write file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {schema} record: {message}")]
    Csv { schema: String, message: String },

    #[error("{schema} record has {actual} values, schema defines {expected} columns")]
    ArityMismatch {
        schema: String,
        expected: usize,
        actual: usize,
    },
}

impl OutputError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
