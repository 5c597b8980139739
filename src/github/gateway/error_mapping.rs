//! Error mapping helpers for the Octocrab tracker gateway.

use http::StatusCode;

use crate::github::error::TrackerError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> TrackerError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return map_http_error(operation, source.status_code, &source.message);
    }

    if is_network_error(error) {
        return TrackerError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    TrackerError::Api {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn map_http_error(operation: &str, status: StatusCode, message: &str) -> TrackerError {
    if status == StatusCode::NOT_FOUND {
        TrackerError::NotFound {
            operation: operation.to_owned(),
            message: message.to_owned(),
        }
    } else if is_auth_failure(status) {
        TrackerError::Authentication {
            message: format!("{operation} failed: GitHub returned {status} {message}"),
        }
    } else {
        TrackerError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use rstest::rstest;

    use super::map_http_error;
    use crate::github::error::TrackerError;

    #[rstest]
    fn not_found_keeps_operation_name() {
        let error = map_http_error("issue", StatusCode::NOT_FOUND, "Not Found");
        assert_eq!(
            error,
            TrackerError::NotFound {
                operation: "issue".to_owned(),
                message: "Not Found".to_owned(),
            }
        );
    }

    #[rstest]
    #[case(StatusCode::UNAUTHORIZED)]
    #[case(StatusCode::FORBIDDEN)]
    fn auth_statuses_map_to_authentication(#[case] status: StatusCode) {
        let error = map_http_error("pull request", status, "Bad credentials");
        assert!(
            matches!(error, TrackerError::Authentication { ref message } if message.contains("Bad credentials")),
            "expected Authentication, got {error:?}"
        );
    }

    #[rstest]
    fn server_errors_map_to_api() {
        let error = map_http_error("statuses", StatusCode::BAD_GATEWAY, "upstream down");
        assert!(
            matches!(error, TrackerError::Api { ref message } if message.contains("502")),
            "expected Api with status, got {error:?}"
        );
    }
}
