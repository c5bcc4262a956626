//! Filter bar component
//!
//! Shows the remaining-item count and the All / Active / Completed tabs.
//! Hidden until the first non-empty fetch.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::FilterMode;

/// Props for the FilterBar component
#[derive(Default, Props)]
pub struct FilterBarProps {
    /// Active filter mode
    pub filter: FilterMode,
    /// Count of active (not completed) todos
    pub items_left: usize,
}

/// Filter tabs plus the remaining-item count
#[component]
pub fn FilterBar(props: &FilterBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let active = props.filter;

    let items_label = if props.items_left == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", props.items_left)
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: items_label, color: theme.text_dimmed)
            View(flex_direction: FlexDirection::Row, column_gap: 2) {
                #([FilterMode::All, FilterMode::Active, FilterMode::Completed]
                    .iter()
                    .map(|mode| {
                        let selected = *mode == active;
                        element! {
                            Text(
                                content: mode.to_string(),
                                color: if selected { theme.highlight } else { theme.text_dimmed },
                                weight: if selected { Weight::Bold } else { Weight::Normal },
                            )
                        }
                    }))
            }
        }
    }
}
