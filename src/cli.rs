use crate::github::API_BASE_URL;
use crate::models::{CardConfig, DEFAULT_USERNAME};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "github-profile-card")]
#[command(
    about = "GitHub Profile Card - Fetches a GitHub user's public profile and renders it as HTML"
)]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Heading shown at the top of the card
    #[arg(long, global = true, default_value = "GitHub User Profile")]
    pub title: String,

    /// Text shown under the heading
    #[arg(long, global = true, default_value = "Displaying data from the GitHub API")]
    pub description: String,

    /// Card background color
    #[arg(long, global = true, default_value = "#f0f0f0")]
    pub background_color: String,

    /// Card text color
    #[arg(long, global = true, default_value = "#333333")]
    pub text_color: String,

    /// GitHub user to show
    #[arg(long, global = true, env = "GITHUB_PROFILE_USERNAME", default_value = DEFAULT_USERNAME)]
    pub username: String,

    /// GitHub REST API root
    #[arg(long, global = true, env = "GITHUB_API_URL", default_value = API_BASE_URL)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the profile once and print the rendered card (default)
    Render {
        /// Write the markup to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Emit a complete HTML document rather than a fragment
        #[arg(long)]
        document: bool,
    },

    /// Serve the card over HTTP
    Serve {
        /// Address to bind
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
        bind: String,

        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = 3000)]
        port: u16,
    },
}

impl Cli {
    pub fn card_config(&self) -> CardConfig {
        CardConfig {
            title: self.title.clone(),
            description: self.description.clone(),
            background_color: self.background_color.clone(),
            text_color: self.text_color.clone(),
            username: self.username.clone(),
        }
    }
}
