//! Test doubles for the HTTP seam.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{ApiClient, ApiRequest, HttpTransport, Navigator, RawResponse};
use crate::system::auth::storage::{MemoryTokenStore, TokenStore};

pub const TEST_BASE_URL: &str = "https://api.test";

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<RawResponse, String>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn push(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(RawResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push(status, &body.to_string());
    }

    pub fn push_failure(&self, reason: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(reason.to_string()));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, String> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err("no response queued".to_string()))
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    redirects: AtomicUsize,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn test_client() -> (
    ApiClient,
    Arc<MockTransport>,
    Arc<MemoryTokenStore>,
    Arc<RecordingNavigator>,
) {
    let transport = Arc::new(MockTransport::default());
    let tokens = Arc::new(MemoryTokenStore::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let client = ApiClient::new(
        TEST_BASE_URL,
        transport.clone(),
        tokens.clone() as Arc<dyn TokenStore + Send + Sync>,
        navigator.clone(),
    );
    (client, transport, tokens, navigator)
}
