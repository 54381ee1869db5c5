use clap::Parser;
use colored::*;
use github_profile_card::cli::{Cli, Command};
use github_profile_card::models::DisplayState;
use github_profile_card::render::render_document;
use github_profile_card::server::{start_card_server, AppState};
use github_profile_card::{CardConfig, GitHubClient, ProfileCard};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Logs go to stderr so rendered markup on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.card_config();
    let client = Arc::new(GitHubClient::with_base_url(&cli.api_url)?);

    match cli.command {
        None => render(config, client, None, false).await,
        Some(Command::Render { output, document }) => {
            render(config, client, output, document).await
        }
        Some(Command::Serve { bind, port }) => {
            eprintln!("{}", "GitHub Profile Card Server".bold().green());
            eprintln!("{}\n", "=".repeat(50).dimmed());

            let card = Arc::new(ProfileCard::mount(config, client));

            eprintln!(
                "📡 Serving profile of {} on http://{}:{}",
                card.username(),
                bind,
                port
            );
            eprintln!("\nPress Ctrl+C to stop the server\n");

            let shutdown = async {
                tokio::signal::ctrl_c().await.ok();
                eprintln!("\n🛑 Shutting down server...");
            };

            start_card_server(AppState { card }, &bind, port, shutdown)
                .await
                .map_err(|e| anyhow::anyhow!("Server failed: {}", e))?;

            eprintln!("✅ Server stopped");
            Ok(())
        }
    }
}

async fn render(
    config: CardConfig,
    client: Arc<GitHubClient>,
    output: Option<PathBuf>,
    document: bool,
) -> anyhow::Result<()> {
    let card = ProfileCard::mount(config, client);

    match card.settled().await {
        DisplayState::Failed { message } => {
            eprintln!("{} {}", "⚠️ Could not load profile:".yellow(), message);
        }
        DisplayState::Loaded { profile } => {
            eprintln!("{} {}", "✅ Loaded profile of".green(), profile.login);
        }
        DisplayState::Loading => {}
    }

    let mut html = card.render();
    if document {
        html = render_document(card.config(), &html);
    }

    match output {
        Some(path) => {
            tokio::fs::write(&path, html).await?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{}", html),
    }

    Ok(())
}
