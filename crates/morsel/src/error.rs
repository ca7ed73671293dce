use thiserror::Error;

/// How the response layer should classify a failure: query errors are the
/// client's fault, everything else is a server-side failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    BadRequest,
    Server,
}

#[derive(Error, Debug)]
pub enum MorselError {
    #[error("Query error: {0}")]
    Query(#[from] crate::query::QueryError),
    #[error("Backend error: {0}")]
    Backend(#[from] morsel_backend::BackendError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Init Logging error: {0}")]
    InitLogging(#[from] tracing_subscriber::filter::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorselError {
    pub fn fault(&self) -> Fault {
        match self {
            Self::Query(_) => Fault::BadRequest,
            _ => Fault::Server,
        }
    }
}

pub type Result<T> = std::result::Result<T, MorselError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryError;
    use morsel_backend::BackendError;

    #[test]
    fn query_errors_are_client_faults() {
        let err = MorselError::from(QueryError::MissingSearchTarget);
        assert_eq!(err.fault(), Fault::BadRequest);
    }

    #[test]
    fn backend_errors_are_server_faults() {
        let err = MorselError::from(BackendError::Rejected {
            status: 503,
            detail: "shard unavailable".to_owned(),
        });
        assert_eq!(err.fault(), Fault::Server);
    }
}
