//! App header bar component

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Signed-in user id
    pub user_id: Option<u64>,
}

/// App header bar showing the title and the signed-in user
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let user = match props.user_id {
        Some(id) => format!("user {id}"),
        None => "not signed in".to_string(),
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.border,
        ) {
            Text(content: "todos", color: theme.text, weight: Weight::Bold)
            Text(content: user, color: theme.text_dimmed)
        }
    }
}
