//! Plain-text rendering of the screen view.

use mytodo_core::ScreenView;
use std::fmt::Write;

/// Renders the screen the way the mobile layout stacks it.
pub fn render_screen(view: &ScreenView) -> String {
    let mut out = String::new();
    let input = if view.shows_placeholder() {
        view.placeholder
    } else {
        view.draft.as_str()
    };

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "[ {input} ] [{}]", view.add_label);
    for (index, row) in view.rows.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}  [{}]", index + 1, row.value, row.delete_label);
    }
    if let Some(message) = view.empty_message {
        let _ = writeln!(out, "     {message}");
    }
    out
}
