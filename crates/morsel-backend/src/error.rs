use thiserror::Error;
pub type Result<T> = std::result::Result<T, BackendError>;

/// Failures at the search-backend boundary.
///
/// `Display` stays generic on every variant: callers see a server-fault
/// indicator, while the backend's own payload is retained on the error and
/// logged for diagnostics instead of being forwarded.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("search backend unreachable")]
    Transport(#[from] reqwest::Error),
    #[error("search backend rejected the query (status {status})")]
    Rejected { status: u16, detail: String },
    #[error("search backend returned an unexpected response")]
    Decode(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_display_withholds_the_backend_payload() {
        let err = BackendError::Rejected {
            status: 500,
            detail: "index_not_found_exception: no such index [restaurants]".to_owned(),
        };

        let rendered = err.to_string();
        assert!(rendered.contains("500"));
        assert!(!rendered.contains("index_not_found_exception"));
    }
}
