//! Shared test utilities for integration tests.
//!
//! `FakeSleepIq` is an in-memory stand-in for the SleepIQ service. It issues
//! tokens on login, rejects requests whose `_k` is not the current token, and
//! records every request it receives so tests can count round trips.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

use sq_api::{ApiRequest, ApiResponse, Credentials, SleepIqClient, Transport};
use sq_core::error::SqResult;

pub const LOGIN: &str = "sleeper@example.com";
pub const PASSWORD: &str = "correct-horse";

struct FakeState {
    requests: Vec<ApiRequest>,
    tokens_issued: u32,
    current_token: Option<String>,
    reject_all_tokens: bool,
    login_status: Option<StatusCode>,
    scripted: HashMap<String, VecDeque<StatusCode>>,
    beds: Value,
    sleepers: Value,
    family_status: Value,
}

/// In-memory SleepIQ service.
pub struct FakeSleepIq {
    state: Mutex<FakeState>,
}

impl FakeSleepIq {
    /// One bed `B1` shared by sleepers `S1` (left) and `S2` (right).
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(FakeState {
                requests: Vec::new(),
                tokens_issued: 0,
                current_token: None,
                reject_all_tokens: false,
                login_status: None,
                scripted: HashMap::new(),
                beds: json!([
                    {"bedId": "B1", "name": "Main", "sleeperLeftId": "S1", "sleeperRightId": "S2"}
                ]),
                sleepers: json!([
                    {"sleeperId": "S1", "firstName": "Alex", "bedId": "B1"},
                    {"sleeperId": "S2", "firstName": "Sam", "bedId": "B1"}
                ]),
                family_status: json!([
                    {
                        "bedId": "B1",
                        "status": 1,
                        "leftSide": {"isInBed": true, "sleepNumber": 40},
                        "rightSide": {"isInBed": false, "sleepNumber": 55}
                    }
                ]),
            }),
        })
    }

    fn state(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().expect("fake state poisoned")
    }

    /// Invalidate the current token, as a server-side session expiry would.
    pub fn expire_session(&self) {
        self.state().current_token = None;
    }

    /// Answer 401 to every authenticated request regardless of token.
    pub fn reject_all_tokens(&self) {
        self.state().reject_all_tokens = true;
    }

    /// Force the status of every login attempt.
    pub fn set_login_status(&self, status: StatusCode) {
        self.state().login_status = Some(status);
    }

    /// Answer the next authenticated request to `path` with `status`.
    pub fn fail_next(&self, path: &str, status: StatusCode) {
        self.state()
            .scripted
            .entry(path.to_string())
            .or_default()
            .push_back(status);
    }

    pub fn set_beds(&self, beds: Value) {
        self.state().beds = beds;
    }

    pub fn set_sleepers(&self, sleepers: Value) {
        self.state().sleepers = sleepers;
    }

    pub fn set_family_status(&self, family_status: Value) {
        self.state().family_status = family_status;
    }

    /// Every request received, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state().requests.clone()
    }

    /// Number of requests matching method and path.
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.state()
            .requests
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn logins(&self) -> usize {
        self.count(Method::PUT, "/rest/login")
    }

    pub fn clear_requests(&self) {
        self.state().requests.clear();
    }

    fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let mut state = self.state();
        state.requests.push(request.clone());

        if request.method == Method::PUT && request.path == "/rest/login" {
            if let Some(status) = state.login_status {
                return ApiResponse::new(status, "");
            }
            let body = request.body.clone().unwrap_or(Value::Null);
            if body["login"] != LOGIN || body["password"] != PASSWORD {
                return ApiResponse::new(StatusCode::UNAUTHORIZED, r#"{"Error":{"Code":401}}"#);
            }
            state.tokens_issued += 1;
            let token = format!("token-{}", state.tokens_issued);
            state.current_token = Some(token.clone());
            return ApiResponse::new(
                StatusCode::OK,
                json!({"userId": "U1", "key": token}).to_string(),
            );
        }

        let presented = request.query_param("_k");
        let authorized = !state.reject_all_tokens
            && presented.is_some()
            && presented == state.current_token.as_deref();
        if !authorized {
            return ApiResponse::new(StatusCode::UNAUTHORIZED, r#"{"Error":{"Code":50002}}"#);
        }

        if let Some(status) = state
            .scripted
            .get_mut(&request.path)
            .and_then(VecDeque::pop_front)
        {
            return ApiResponse::new(status, "scripted failure");
        }

        let body = match (&request.method, request.path.as_str()) {
            (&Method::GET, "/rest/bed") => json!({"beds": state.beds}),
            (&Method::GET, "/rest/sleeper") => json!({"sleepers": state.sleepers}),
            (&Method::GET, "/rest/bed/familyStatus") => json!({"beds": state.family_status}),
            (&Method::PUT, path) if path.starts_with("/rest/bed/") => json!({}),
            _ => return ApiResponse::new(StatusCode::NOT_FOUND, ""),
        };
        ApiResponse::new(StatusCode::OK, body.to_string())
    }
}

#[async_trait]
impl Transport for FakeSleepIq {
    async fn send(&self, request: &ApiRequest) -> SqResult<ApiResponse> {
        Ok(self.handle(request))
    }
}

/// Client with valid credentials over the fake service.
pub fn client(fake: &Arc<FakeSleepIq>) -> SleepIqClient<Arc<FakeSleepIq>> {
    SleepIqClient::with_transport(Arc::clone(fake), Credentials::new(LOGIN, PASSWORD))
}

/// Client with a wrong password over the fake service.
pub fn client_with_bad_password(fake: &Arc<FakeSleepIq>) -> SleepIqClient<Arc<FakeSleepIq>> {
    SleepIqClient::with_transport(Arc::clone(fake), Credentials::new(LOGIN, "wrong"))
}
