use crate::github::ProfileSource;
use crate::models::{CardConfig, DisplayState};
use crate::render::render_card;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Shown when the fetch task ends without publishing a result.
const FETCH_ABORTED: &str = "Profile fetch ended without a result";

/// A mounted profile card.
///
/// Mounting starts the one and only profile fetch. The card is unmounted when
/// it is dropped (or via [`ProfileCard::unmount`]), which aborts a fetch that
/// is still in flight so a late response never lands.
pub struct ProfileCard {
    config: CardConfig,
    /// User fetched at mount, independent of later `set_config` calls.
    username: String,
    state: watch::Receiver<DisplayState>,
    fetch: JoinHandle<()>,
}

impl ProfileCard {
    /// Mount a card and start fetching `config.username` from `source`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(config: CardConfig, source: Arc<dyn ProfileSource>) -> Self {
        let (tx, rx) = watch::channel(DisplayState::Loading);
        let username = config.username.clone();
        let task_username = username.clone();

        let fetch = tokio::spawn(async move {
            let username = task_username;
            debug!("Fetching profile for {}", username);

            let next = match source.fetch_profile(&username).await {
                Ok(profile) => {
                    info!("Loaded profile for {}", username);
                    DisplayState::Loaded { profile }
                }
                Err(e) => {
                    warn!("Failed to load profile for {}: {}", username, e);
                    DisplayState::Failed {
                        message: e.to_string(),
                    }
                }
            };

            if tx.send(next).is_err() {
                debug!("Card for {} unmounted before its profile resolved", username);
            }
        });

        ProfileCard {
            config,
            username,
            state: rx,
            fetch,
        }
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// The user this card fetched at mount.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Replace the presentation settings. Never refetches.
    pub fn set_config(&mut self, config: CardConfig) {
        self.config = config;
    }

    /// Snapshot of the current display state.
    ///
    /// A fetch task that finished without publishing (it panicked) leaves the
    /// card `Failed` rather than loading forever.
    pub fn state(&self) -> DisplayState {
        let closed = self.state.has_changed().is_err();
        let state = self.state.borrow().clone();
        if closed && state.is_loading() {
            DisplayState::Failed {
                message: FETCH_ABORTED.to_string(),
            }
        } else {
            state
        }
    }

    /// Wait until the fetch has resolved and return the terminal state.
    pub async fn settled(&self) -> DisplayState {
        let mut rx = self.state.clone();
        let result = rx.wait_for(DisplayState::is_settled).await.map(|s| s.clone());
        match result {
            Ok(state) => state,
            Err(_) => {
                error!("Fetch task for {} ended without a result", self.username);
                DisplayState::Failed {
                    message: FETCH_ABORTED.to_string(),
                }
            }
        }
    }

    /// Render the card in its current state.
    pub fn render(&self) -> String {
        render_card(&self.config, &self.state())
    }

    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for ProfileCard {
    fn drop(&mut self) {
        if !self.fetch.is_finished() {
            debug!("Unmounting card for {} with fetch in flight", self.username);
        }
        self.fetch.abort();
    }
}
