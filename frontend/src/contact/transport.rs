use futures::future::LocalBoxFuture;

use crate::config;
use crate::contact::draft::ContactRequest;
use crate::error::ContactError;
use crate::utils::api::Api;

/// Delivers a contact request somewhere. Success means the message was accepted.
pub trait ContactTransport {
    fn deliver<'a>(&'a self, request: &'a ContactRequest) -> LocalBoxFuture<'a, Result<(), ContactError>>;
}

/// Only a 2xx answer counts as delivered.
pub fn status_result(status: u16) -> Result<(), ContactError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ContactError::Status(status))
    }
}

/// Posts the request as JSON to the backend's contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpContactTransport {
    path: String,
    timeout_ms: u32,
}

impl Default for HttpContactTransport {
    fn default() -> Self {
        Self {
            path: config::CONTACT_PATH.to_string(),
            timeout_ms: config::REQUEST_TIMEOUT_MS,
        }
    }
}

impl ContactTransport for HttpContactTransport {
    fn deliver<'a>(&'a self, request: &'a ContactRequest) -> LocalBoxFuture<'a, Result<(), ContactError>> {
        Box::pin(async move {
            let response = Api::post(&self.path)
                .timeout_ms(self.timeout_ms)
                .json(request)?
                .send()
                .await?;
            status_result(response.status())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_accepted() {
        assert_eq!(status_result(200), Ok(()));
        assert_eq!(status_result(201), Ok(()));
        assert_eq!(status_result(299), Ok(()));
    }

    #[test]
    fn anything_else_is_a_status_error() {
        for status in [0, 199, 300, 304, 404, 422, 500, 503] {
            assert_eq!(status_result(status), Err(ContactError::Status(status)));
        }
    }

    #[test]
    fn defaults_point_at_the_contact_endpoint() {
        let transport = HttpContactTransport::default();
        assert_eq!(transport.path, "/api/contact");
        assert_eq!(transport.timeout_ms, 15_000);
    }
}
