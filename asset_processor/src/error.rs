/// Failure while turning an invocation payload into notification records.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("malformed notification batch: {0}")]
    MalformedBatch(#[source] serde_json::Error),

    #[error("malformed notification record at index {index}: {source}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl ProcessingError {
    /// Short category tag attached to failure log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ProcessingError::MalformedBatch(_) => "malformed_batch",
            ProcessingError::MalformedRecord { .. } => "malformed_record",
        }
    }
}
