//! Shared HTTP client and status mapping.

use std::sync::OnceLock;

use crate::error::ColloquyError;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
///
/// No overall request timeout: replies stream for as long as the model
/// generates. Only connection establishment is bounded.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Map a non-success HTTP status to an error.
pub fn status_to_error(status: u16, body: &str) -> ColloquyError {
    match status {
        401 | 403 => ColloquyError::Authentication(body.to_string()),
        _ => ColloquyError::api(status, body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_map_to_authentication() {
        assert!(matches!(
            status_to_error(401, "no key"),
            ColloquyError::Authentication(_)
        ));
        assert!(matches!(
            status_to_error(403, "forbidden"),
            ColloquyError::Authentication(_)
        ));
    }

    #[test]
    fn other_statuses_map_to_api_error() {
        match status_to_error(500, "boom") {
            ColloquyError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
