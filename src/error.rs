use thiserror::Error;

pub type CommandResult<T> = Result<T, KnowledgeToolError>;

#[derive(Debug, Error)]
pub enum KnowledgeToolError {
    #[error("failed to write command output")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn output_error_keeps_io_source() {
        let err = KnowledgeToolError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.to_string(), "failed to write command output");
        assert_eq!(err.source().map(|s| s.to_string()), Some("closed".to_string()));
    }
}
