use async_trait::async_trait;
use skyfare::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock TokenProvider for testing
///
/// Clones share their call counter, so a test can keep a handle while the
/// use case owns another.
#[derive(Clone)]
pub struct MockTokenProvider {
    token: String,
    failure_body: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl MockTokenProvider {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            failure_body: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Simulates a rejected exchange carrying the provider's raw body
    pub fn with_failure(body: &str) -> Self {
        Self {
            token: String::new(),
            failure_body: Some(body.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenProvider for MockTokenProvider {
    async fn acquire_token(&self) -> Result<AccessToken> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(body) = &self.failure_body {
            return Err(FlightSearchError::TokenExchange { body: body.clone() }.into());
        }

        Ok(AccessToken {
            access_token: self.token.clone(),
            expires_in: 1799,
        })
    }
}
