/// Escape HTML to prevent XSS
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// CSS class of a message bubble
pub fn message_class(is_user: bool) -> &'static str {
    if is_user {
        "message user"
    } else {
        "message ai"
    }
}

/// CSS class of a sidebar entry
pub fn conversation_item_class(is_current: bool) -> &'static str {
    if is_current {
        "conversation-item active"
    } else {
        "conversation-item"
    }
}
