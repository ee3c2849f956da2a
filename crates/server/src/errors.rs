use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_pass_through_unchanged() {
        let err: StartupError = anyhow::anyhow!("server.port must be in 1..=65535").into();
        assert!(matches!(err, StartupError::Any(_)));
        assert_eq!(err.to_string(), "server.port must be in 1..=65535");
    }
}
