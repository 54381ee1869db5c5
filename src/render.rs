//! HTML rendering for profile cards.
//!
//! Rendering is a pure function of the card's configuration and its current
//! [`DisplayState`]; nothing here touches the network.

use crate::models::{CardConfig, DisplayState};
use crate::types::Profile;
use serde_json::Number;
use std::fmt::Write;

/// Foreground color of the inline error line.
const ERROR_COLOR: &str = "#ef4444";

/// Render the card markup for `state`.
pub fn render_card(config: &CardConfig, state: &DisplayState) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<div class="p-6 rounded-lg shadow-lg" style="background-color: {}; color: {}">"#,
        html_escape(&config.background_color),
        html_escape(&config.text_color),
    );
    let _ = write!(
        html,
        r#"<h2 class="text-3xl font-bold mb-4">{}</h2>"#,
        html_escape(&config.title)
    );
    let _ = write!(html, r#"<p class="mb-6">{}</p>"#, html_escape(&config.description));

    match state {
        DisplayState::Loading => html.push_str("<p>Loading...</p>"),
        DisplayState::Failed { message } => {
            let _ = write!(
                html,
                r#"<p class="text-red-500" style="color: {}">Error: {}</p>"#,
                ERROR_COLOR,
                html_escape(message)
            );
        }
        DisplayState::Loaded { profile } => render_profile(&mut html, profile),
    }

    html.push_str("</div>");
    html
}

fn render_profile(html: &mut String, profile: &Profile) {
    let display_name = html_escape(profile.display_name());

    html.push_str(r#"<div class="flex flex-col md:flex-row items-center gap-6">"#);
    let _ = write!(
        html,
        r#"<img src="{}" alt="{}" class="w-32 h-32 rounded-full">"#,
        html_escape(&profile.avatar_url),
        display_name
    );
    html.push_str("<div>");
    let _ = write!(html, r#"<h3 class="text-2xl font-semibold">{}</h3>"#, display_name);
    let _ = write!(
        html,
        r#"<p class="text-lg mb-2">{}</p>"#,
        html_escape(profile.bio.as_deref().unwrap_or_default())
    );
    html.push_str(r#"<div class="flex gap-4">"#);
    let _ = write!(html, "<span>Repos: {}</span>", count(profile.public_repos.as_ref()));
    let _ = write!(html, "<span>Followers: {}</span>", count(profile.followers.as_ref()));
    let _ = write!(html, "<span>Following: {}</span>", count(profile.following.as_ref()));
    html.push_str("</div></div></div>");
}

fn count(value: Option<&Number>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

/// Wrap a rendered card in a standalone HTML5 document.
pub fn render_document(config: &CardConfig, card: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        html_escape(&config.title),
        card
    )
}

/// Escape HTML special characters in text and attribute values.
pub fn html_escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
