#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use github_profile_card::error::{ProfileCardError, Result};
use github_profile_card::github::ProfileSource;
use github_profile_card::types::Profile;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// The profile used throughout the card tests: empty name, so the login shows.
pub fn sample_profile_json() -> serde_json::Value {
    serde_json::json!({
        "login": "zCastleM",
        "avatar_url": "http://x/a.png",
        "name": "",
        "bio": "hi",
        "public_repos": 5,
        "followers": 10,
        "following": 2
    })
}

/// How the fake GitHub answers `/users/{username}`.
#[derive(Clone)]
pub enum Reply {
    Json(serde_json::Value),
    Status(StatusCode),
    Raw(&'static str),
}

#[derive(Clone)]
struct FakeState {
    reply: Reply,
    hits: Arc<AtomicUsize>,
    last_user: Arc<std::sync::Mutex<Option<String>>>,
}

/// A local stand-in for api.github.com.
pub struct FakeGitHub {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    last_user: Arc<std::sync::Mutex<Option<String>>>,
}

impl FakeGitHub {
    pub async fn start(reply: Reply) -> anyhow::Result<Self> {
        let hits = Arc::new(AtomicUsize::new(0));
        let last_user = Arc::new(std::sync::Mutex::new(None));
        let state = FakeState {
            reply,
            hits: hits.clone(),
            last_user: last_user.clone(),
        };

        let app = Router::new()
            .route("/users/:username", get(user_handler))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(FakeGitHub {
            base_url: format!("http://{}", addr),
            hits,
            last_user,
        })
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_user(&self) -> Option<String> {
        self.last_user.lock().unwrap().clone()
    }
}

async fn user_handler(
    State(state): State<FakeState>,
    Path(username): Path<String>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_user.lock().unwrap() = Some(username);

    match state.reply {
        Reply::Json(body) => axum::Json(body).into_response(),
        Reply::Status(status) => (status, "{\"message\":\"Not Found\"}").into_response(),
        Reply::Raw(body) => (StatusCode::OK, body).into_response(),
    }
}

/// In-process source that counts calls and answers with a canned result.
pub struct StubSource {
    outcome: StubOutcome,
    calls: AtomicUsize,
}

pub enum StubOutcome {
    Profile(Profile),
    NetworkDown(&'static str),
    NotFound,
}

impl StubSource {
    pub fn new(outcome: StubOutcome) -> Arc<Self> {
        Arc::new(StubSource {
            outcome,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileSource for StubSource {
    async fn fetch_profile(&self, _username: &str) -> Result<Profile> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            StubOutcome::Profile(profile) => Ok(profile.clone()),
            StubOutcome::NetworkDown(message) => Err(ProfileCardError::IoError(
                std::io::Error::new(std::io::ErrorKind::NotConnected, *message),
            )),
            StubOutcome::NotFound => {
                Err(ProfileCardError::HttpStatus(reqwest::StatusCode::NOT_FOUND))
            }
        }
    }
}

/// Source that never answers until released, and records whether its pending
/// fetch was dropped.
pub struct GatedSource {
    pub release: tokio::sync::Notify,
    pub dropped: Arc<std::sync::atomic::AtomicBool>,
    pub profile: Profile,
}

struct DropFlag(Arc<std::sync::atomic::AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl GatedSource {
    pub fn new(profile: Profile) -> Arc<Self> {
        Arc::new(GatedSource {
            release: tokio::sync::Notify::new(),
            dropped: Arc::new(std::sync::atomic::AtomicBool::new(false)),
            profile,
        })
    }

    pub fn was_dropped(&self) -> bool {
        self.dropped.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileSource for GatedSource {
    async fn fetch_profile(&self, _username: &str) -> Result<Profile> {
        let _flag = DropFlag(self.dropped.clone());
        self.release.notified().await;
        Ok(self.profile.clone())
    }
}

/// Source whose fetch panics instead of returning.
pub struct PanickingSource;

#[async_trait]
impl ProfileSource for PanickingSource {
    async fn fetch_profile(&self, username: &str) -> Result<Profile> {
        panic!("fetch for {} blew up", username);
    }
}

/// Base URL of a local port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
