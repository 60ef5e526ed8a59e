use std::fmt::{Display, Formatter};

pub type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type Result<T> = std::result::Result<T, DynError>;

/// Failure modes of a single API request.
///
/// `Transport` and `Status` map to the two externally observable failure
/// classes (request never sent vs. non-2xx reply); `Malformed` covers a 2xx
/// reply whose body does not decode into the expected shape. An empty but
/// successful result set is not an error.
#[derive(Debug)]
pub enum ApiError {
    /// Network unreachable, DNS failure, connection reset: the request
    /// could not be sent or completed.
    Transport(String),
    /// The server answered with a non-2xx status code.
    Status(u16),
    /// The body of a successful response failed to deserialize.
    Malformed(String),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "request failed: {msg}"),
            ApiError::Status(code) => write!(f, "API error: {code}"),
            ApiError::Malformed(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else if err.is_decode() {
            ApiError::Malformed(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_includes_code() {
        assert_eq!(ApiError::Status(500).to_string(), "API error: 500");
    }

    #[test]
    fn transport_error_message_carries_cause() {
        let e = ApiError::Transport("connection refused".into());
        assert_eq!(e.to_string(), "request failed: connection refused");
    }
}
