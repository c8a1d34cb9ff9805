//! Contextual escaping for generated markup.

use std::borrow::Cow;

/// Escape HTML special characters in text content and attribute values.
pub(crate) fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;"),
    )
}

/// Keep a `<style>` or `<script>` body from closing its element early.
///
/// Entity escaping would corrupt CSS and JavaScript, so only `</` is rewritten.
pub(crate) fn escape_raw_text(s: &str) -> Cow<'_, str> {
    if s.contains("</") {
        Cow::Owned(s.replace("</", "<\\/"))
    } else {
        Cow::Borrowed(s)
    }
}
