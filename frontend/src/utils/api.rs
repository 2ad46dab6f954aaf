use std::future::Future;

use futures::future::{self, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::config;
use crate::error::ApiError;

/// Resolve `request` unless `deadline` fires first.
pub async fn race_timeout<F, D>(request: F, deadline: D, timeout_ms: u32) -> Result<F::Output, ApiError>
where
    F: Future + Unpin,
    D: Future<Output = ()> + Unpin,
{
    match future::select(request, deadline).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(((), _)) => Err(ApiError::Timeout(timeout_ms)),
    }
}

/// Thin API client bound to the configured backend URL.
pub struct Api;

/// Request wrapper that applies the backend URL and a bounded timeout.
pub struct RequestWrapper {
    request: Request,
    path: String,
    timeout_ms: u32,
}

impl RequestWrapper {
    fn post(path: &str) -> Self {
        let full_url = format!("{}{}", config::get_backend_url(), path);
        let request = Request::post(&full_url).credentials(RequestCredentials::SameOrigin);

        Self {
            request,
            path: path.to_string(),
            timeout_ms: config::REQUEST_TIMEOUT_MS,
        }
    }

    /// Override the default request timeout
    pub fn timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, ApiError> {
        let body_string = serde_json::to_string(data)?;
        self.request = self.request.header("Content-Type", "application/json");
        self.request = self.request.body(body_string);
        Ok(self)
    }

    /// Send the request, giving up once the timeout elapses.
    ///
    /// A timed out request is abandoned, not cancelled: the browser may still
    /// complete it, but its response is never looked at.
    pub async fn send(self) -> Result<Response, ApiError> {
        let RequestWrapper {
            request,
            path,
            timeout_ms,
        } = self;

        let sending = Box::pin(request.send());
        match race_timeout(sending, TimeoutFuture::new(timeout_ms), timeout_ms).await {
            Ok(Ok(response)) => {
                gloo_console::log!(format!("{} answered {}", path, response.status()));
                Ok(response)
            }
            Ok(Err(e)) => {
                gloo_console::log!(format!("{} failed: {}", path, e));
                Err(ApiError::Network(e.to_string()))
            }
            Err(timed_out) => {
                gloo_console::log!(format!("{} timed out after {} ms", path, timeout_ms));
                Err(timed_out)
            }
        }
    }
}

impl Api {
    /// Create a POST request against the backend URL
    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::post(path)
    }
}

#[cfg(test)]
mod tests {
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    use super::*;

    #[test]
    fn answer_before_deadline_wins() {
        let result = block_on(race_timeout(ready(204u16), pending::<()>(), 15_000));
        assert_eq!(result, Ok(204));
    }

    #[test]
    fn deadline_before_answer_is_a_timeout() {
        let result = block_on(race_timeout(pending::<u16>(), ready(()), 15_000));
        assert_eq!(result, Err(ApiError::Timeout(15_000)));
    }

    #[test]
    fn late_answer_after_deadline_is_ignored() {
        let (tx, rx) = oneshot::channel::<u16>();
        let result = block_on(race_timeout(rx, ready(()), 500));
        assert_eq!(result, Err(ApiError::Timeout(500)));
        // the receiver is gone, so the answer has nowhere to land
        assert!(tx.send(200).is_err());
    }
}
