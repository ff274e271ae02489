use async_trait::async_trait;
use skyfare::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock OfferGateway for testing
///
/// Serves a canned provider payload (raw JSON text, parsed on each call)
/// and records the query pairs and bearer tokens it receives so tests can
/// assert on query construction. Clones share their recorded state.
#[derive(Clone)]
pub struct MockOfferGateway {
    payload: String,
    failure_body: Option<String>,
    calls: Arc<AtomicUsize>,
    seen_params: Arc<Mutex<Vec<Vec<(String, String)>>>>,
    seen_tokens: Arc<Mutex<Vec<String>>>,
}

impl MockOfferGateway {
    pub fn new(payload: &str) -> Self {
        Self {
            payload: payload.to_string(),
            failure_body: None,
            calls: Arc::new(AtomicUsize::new(0)),
            seen_params: Arc::new(Mutex::new(Vec::new())),
            seen_tokens: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Serves an empty search result
    pub fn empty() -> Self {
        Self::new(r#"{"data": []}"#)
    }

    /// Simulates a rejected search carrying the provider's raw body
    pub fn with_failure(body: &str) -> Self {
        Self {
            payload: String::new(),
            failure_body: Some(body.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
            seen_params: Arc::new(Mutex::new(Vec::new())),
            seen_tokens: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Query pairs of the most recent call
    pub fn last_params(&self) -> Vec<(String, String)> {
        self.seen_params
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_default()
    }

    /// Bearer token of the most recent call
    pub fn last_token(&self) -> Option<String> {
        self.seen_tokens.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl OfferGateway for MockOfferGateway {
    async fn fetch_offers(
        &self,
        params: &[(&'static str, String)],
        token: &AccessToken,
    ) -> Result<RawSearchResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_params.lock().unwrap().push(
            params
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
        );
        self.seen_tokens
            .lock()
            .unwrap()
            .push(token.access_token.clone());

        if let Some(body) = &self.failure_body {
            return Err(FlightSearchError::OfferSearch { body: body.clone() }.into());
        }

        let payload: RawSearchResponse = serde_json::from_str(&self.payload)
            .map_err(|e| anyhow::anyhow!("Mock payload does not parse: {}", e))?;
        Ok(payload)
    }
}
