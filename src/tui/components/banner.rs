//! Error banner component
//!
//! A dismissible bar shown while an operation error message is present.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Render the error banner as an optional element
pub fn render_banner(message: &Option<String>) -> Option<AnyElement<'static>> {
    let theme = theme();

    message.as_ref().map(|message| {
        element! {
            View(
                width: 100pct,
                height: 3,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                background_color: Color::Black,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: theme.error,
            ) {
                Text(content: message.clone(), color: theme.error)
                Text(content: "  [Esc] dismiss", color: theme.text_dimmed)
            }
        }
        .into_any()
    })
}
