pub mod card;
pub mod cli;
pub mod error;
pub mod github;
pub mod models;
pub mod render;
pub mod server;
pub mod types;

pub use card::ProfileCard;
pub use error::{ProfileCardError, Result};
pub use github::{GitHubClient, ProfileSource};
pub use models::{CardConfig, DisplayState};
