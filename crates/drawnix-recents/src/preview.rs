//! Preview snippets attached to recent-file entries at add time.

/// Produces a single-line snippet of `content`, at most `max_chars`
/// characters long.
///
/// Runs of whitespace (including newlines) collapse to single spaces so
/// the snippet renders on one line. Truncation appends an ellipsis; the
/// ellipsis counts against the budget. The payload is opaque to the
/// menu and never required for display.
#[must_use]
pub fn snippet(content: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    let collapsed: String = {
        let mut out = String::with_capacity(content.len().min(max_chars * 4));
        let mut last_was_space = false;
        for c in content.chars() {
            if c.is_whitespace() {
                if !last_was_space && !out.is_empty() {
                    out.push(' ');
                }
                last_was_space = true;
            } else {
                out.push(c);
                last_was_space = false;
            }
        }
        out.trim_end().to_string()
    };

    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let keep = max_chars - 1;
    let mut out: String = collapsed.chars().take(keep).collect();
    out.push('…');
    out
}
