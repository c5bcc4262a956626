//! New-todo input row
//!
//! A bordered text input for entering a new todo title. The input is
//! locked (keystrokes ignored, dimmed placeholder) while an add is in
//! flight.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the NewTodoInput component
#[derive(Default, Props)]
pub struct NewTodoInputProps {
    /// Current input text
    pub value: String,
    /// Locked while an add is in flight
    pub disabled: bool,
    /// Whether the input has keyboard focus
    pub focused: bool,
    /// Called with the new text on every edit
    pub on_change: Handler<String>,
}

/// Text input for a new todo title
#[component]
pub fn NewTodoInput(props: &NewTodoInputProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let border_color = if props.focused && !props.disabled {
        theme.border_focused
    } else {
        theme.border
    };

    let on_change = props.on_change.clone();
    let value = props.value.clone();
    let disabled = props.disabled;
    let focused = props.focused;

    element! {
        View(
            width: 100pct,
            height: 3,
            flex_direction: FlexDirection::Row,
            border_style: BorderStyle::Round,
            border_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(margin_right: 1) {
                Text(
                    content: ">",
                    color: if disabled { theme.text_dimmed } else { theme.border_focused },
                )
            }
            View(flex_grow: 1.0) {
                #(if disabled {
                    element! {
                        Text(content: "Adding...", color: theme.text_dimmed)
                    }
                    .into_any()
                } else if value.is_empty() && !focused {
                    element! {
                        Text(content: "What needs to be done?", color: theme.text_dimmed)
                    }
                    .into_any()
                } else {
                    element! {
                        TextInput(
                            value: value.clone(),
                            has_focus: focused,
                            on_change: on_change,
                            color: theme.text,
                        )
                    }
                    .into_any()
                })
            }
        }
    }
}
