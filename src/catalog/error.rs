use reqwest::StatusCode;
use thiserror::Error;

/// Which endpoint a fetch targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Products,
    Categories,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Products => "products",
            Resource::Categories => "categories",
        }
    }

    /// Message surfaced to the view when the endpoint answers with a non-2xx status
    pub fn failure_message(&self) -> &'static str {
        match self {
            Resource::Products => "Failed to fetch products",
            Resource::Categories => "Failed to fetch the categories",
        }
    }
}

/// Failure of a single catalog fetch
///
/// Only the `Display` text survives past the data source; the variants exist
/// for logging.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Endpoint answered with a non-success status
    #[error("{}", .resource.failure_message())]
    Status {
        resource: Resource,
        status: StatusCode,
    },

    /// Connection, transport or timeout failure
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// Body was not the expected JSON shape
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Status { .. } => "http_status",
            FetchError::Network(_) => "network",
            FetchError::Parse(_) => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        let err = FetchError::Status {
            resource: Resource::Products,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.to_string(), "Failed to fetch products");
        assert_eq!(err.kind(), "http_status");

        let err = FetchError::Status {
            resource: Resource::Categories,
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "Failed to fetch the categories");
    }

    #[test]
    fn test_parse_error_keeps_serde_message() {
        let serde_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let expected = serde_err.to_string();
        let err = FetchError::from(serde_err);
        assert_eq!(err.to_string(), expected);
        assert_eq!(err.kind(), "parse");
    }
}
