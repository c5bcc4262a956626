//! Todo list pane
//!
//! Renders one row per visible todo: a checkbox reflecting completion, the
//! title, and a busy overlay on the row targeted by an in-flight delete.
//! The optimistic pending row renders last with a permanent busy overlay.

use iocraft::prelude::*;

use crate::tui::app::model::{PendingRow, TodoRow};
use crate::tui::theme::theme;

/// Props for the TodoList component
#[derive(Default, Props)]
pub struct TodoListProps {
    /// Confirmed rows under the active filter
    pub rows: Vec<TodoRow>,
    /// Placeholder row for an optimistic add
    pub pending_row: Option<PendingRow>,
    /// True until the first fetch settles
    pub is_loading: bool,
}

/// List pane showing the visible todos
#[component]
pub fn TodoList(props: &TodoListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            flex_grow: 1.0,
            width: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
        ) {
            #(render_rows(props))
        }
    }
}

fn render_rows(props: &TodoListProps) -> Option<AnyElement<'static>> {
    let theme = theme();

    if props.is_loading {
        return Some(
            element! {
                View(
                    flex_grow: 1.0,
                    width: 100pct,
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                ) {
                    Text(content: "Loading todos...", color: theme.text_dimmed)
                }
            }
            .into_any(),
        );
    }

    if props.rows.is_empty() && props.pending_row.is_none() {
        return Some(
            element! {
                View(
                    flex_grow: 1.0,
                    width: 100pct,
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                ) {
                    Text(content: "Nothing to do", color: theme.text_dimmed)
                }
            }
            .into_any(),
        );
    }

    let rows = props.rows.clone();
    let pending = props.pending_row.clone();

    Some(
        element! {
            View(
                width: 100pct,
                height: 100pct,
                flex_direction: FlexDirection::Column,
            ) {
                #(rows.iter().map(|row| {
                    let indicator = if row.selected { ">" } else { " " };
                    let checkbox = if row.completed { "[x]" } else { "[ ]" };
                    let checkbox_color = if row.completed {
                        theme.status_done
                    } else {
                        theme.status_active
                    };
                    let title_color = if row.busy || row.completed {
                        theme.text_dimmed
                    } else {
                        theme.text
                    };

                    element! {
                        View(
                            height: 1,
                            width: 100pct,
                            padding_left: 1,
                            background_color: if row.selected { Some(theme.highlight) } else { None },
                        ) {
                            Text(content: indicator.to_string(), color: theme.text)
                            Text(
                                content: format!(" {}", checkbox),
                                color: if row.selected { theme.text } else { checkbox_color },
                            )
                            Text(content: format!(" {}", row.title), color: title_color)
                            #(row.busy.then(|| {
                                element! {
                                    Text(content: " (deleting...)", color: theme.busy)
                                }
                                .into_any()
                            }))
                        }
                    }
                }))
                #(pending.as_ref().map(|row| {
                    element! {
                        View(height: 1, width: 100pct, padding_left: 1) {
                            Text(content: "  [ ]", color: theme.text_dimmed)
                            Text(content: format!(" {}", row.title), color: theme.text_dimmed)
                            Text(content: " (saving...)", color: theme.busy)
                        }
                    }
                }))
            }
        }
        .into_any(),
    )
}
