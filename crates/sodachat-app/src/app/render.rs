//! Terminal renditions of the header, sidebar and chat screen.

use chrono::{DateTime, Utc};
use colored::Colorize;

use sodachat_core::format::{format_conversation_date, format_message_time};
use sodachat_core::ConversationStore;
use sodachat_types::Message;

pub fn render_header() -> String {
    format!(
        "{}\n{}",
        "🥤 Soda Machine AI Chat".bright_cyan().bold(),
        "Powered by AI".bright_black()
    )
}

/// Numbered conversation list; the current conversation is marked with `*`
pub fn render_sidebar(store: &ConversationStore, now: DateTime<Utc>) -> String {
    let mut out = format!("{}\n", "Conversation History".bold());

    if store.is_empty() {
        out.push_str(&format!("  {}\n", "No conversations yet".bright_black()));
        return out;
    }

    for (index, conv) in store.conversations().iter().enumerate() {
        let is_current = store.current_id() == Some(conv.id.as_str());
        let marker = if is_current { "*" } else { " " };
        let date = format_conversation_date(conv.updated_at, now);
        let line = format!("{} {:>2}. {}  {}", marker, index + 1, conv.title, date.bright_black());

        if is_current {
            out.push_str(&format!("{}\n", line.green()));
        } else {
            out.push_str(&format!("{}\n", line));
        }
    }

    out
}

pub fn render_message(message: &Message) -> String {
    let time = format_message_time(message.timestamp);
    let author = if message.is_user {
        message.author_label().bright_blue().bold()
    } else {
        message.author_label().bright_magenta().bold()
    };

    format!("[{}] {}: {}", time.bright_black(), author, message.content)
}

pub fn render_chat_screen(messages: &[Message]) -> String {
    if messages.is_empty() {
        return [
            "💬 Start a new conversation".bold().to_string(),
            "I'm an AI soda machine!".to_string(),
            "You can ask me anything or order, for example:".to_string(),
            "  What do you have in stock?".bright_black().to_string(),
            "  I want to buy a coke".bright_black().to_string(),
        ]
        .join("\n");
    }

    messages
        .iter()
        .map(render_message)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_loading() -> String {
    "AI is thinking...".bright_black().italic().to_string()
}

pub fn render_help() -> String {
    [
        "Commands:",
        "  /new           start a new conversation",
        "  /list          show conversation history",
        "  /select <n>    switch to conversation number n (or by id)",
        "  /show          print the current conversation",
        "  /help          show this help",
        "  exit | quit    leave",
        "Anything else is sent to the soda machine.",
    ]
    .join("\n")
}
