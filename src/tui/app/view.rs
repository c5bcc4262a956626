//! Main todo app view component
//!
//! Wires the pure model to the iocraft render loop: keyboard events map to
//! actions through `key_to_action`, async handlers run the network calls
//! and dispatch completion actions back through the reducer.

// Allow clone on Copy types - used intentionally in async closures for clarity
#![allow(clippy::clone_on_copy)]

use iocraft::prelude::*;

use crate::tui::components::{
    FilterBar, Footer, Header, NewTodoInput, TodoList, render_banner,
};
use crate::tui::theme::theme;

use super::model::{
    AppAction, AppState, ERROR_CLEAR_SECS, compute_view_model, key_to_action, reduce_app_state,
};
use super::operations::{
    CreateOutcome, DeleteOutcome, load_todos, remove_todo, store_from_config, submit_todo,
};

/// Apply a pure action to the shared state
fn dispatch(state: &mut State<AppState>, action: AppAction) {
    let next = reduce_app_state(state.read().clone(), action);
    state.set(next);
}

/// Props for the TodoApp component
#[derive(Default, Props)]
pub struct TodoAppProps {
    /// Signed-in user id from configuration
    pub user_id: Option<u64>,
}

/// Main todo app component
#[component]
pub fn TodoApp<'a>(props: &TodoAppProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let theme = theme();

    let user_id = props.user_id;
    let state: State<AppState> = hooks.use_state(|| AppState::with_user(user_id));

    // Fire-and-forget 3-second timer that clears the banner. Each error
    // schedules its own timer; timers are never cancelled, so an earlier
    // one can clear a later banner early.
    let error_timer_handler = hooks.use_async_handler({
        let state = state.clone();
        move |_: ()| {
            let mut state = state.clone();
            async move {
                tokio::time::sleep(std::time::Duration::from_secs(ERROR_CLEAR_SECS)).await;
                dispatch(&mut state, AppAction::ErrorTimerElapsed);
            }
        }
    });

    // Async fetch handler refreshing the full list from the server
    let fetch_handler = hooks.use_async_handler({
        let state = state.clone();
        let error_timer = error_timer_handler.clone();
        move |_: ()| {
            let mut state = state.clone();
            let error_timer = error_timer.clone();
            async move {
                let Some(user_id) = state.read().user_id else {
                    return;
                };
                let outcome = match store_from_config() {
                    Ok(store) => load_todos(&store, user_id).await,
                    Err(e) => {
                        tracing::warn!("cannot build the API client: {e}");
                        super::operations::FetchOutcome::Failed
                    }
                };
                let action = outcome.into_action();
                let failed = action == AppAction::FetchFailed;
                dispatch(&mut state, action);
                if failed {
                    error_timer(());
                }
            }
        }
    });

    // Async add handler; on success the optimistic row appears and a full
    // re-fetch confirms it
    let add_handler = hooks.use_async_handler({
        let state = state.clone();
        let fetch = fetch_handler.clone();
        let error_timer = error_timer_handler.clone();
        move |title: String| {
            let mut state = state.clone();
            let fetch = fetch.clone();
            let error_timer = error_timer.clone();
            async move {
                let Some(user_id) = state.read().user_id else {
                    return;
                };
                let outcome = match store_from_config() {
                    Ok(store) => submit_todo(&store, title, user_id).await,
                    Err(e) => {
                        tracing::warn!("cannot build the API client: {e}");
                        CreateOutcome::Failed
                    }
                };
                let created = matches!(outcome, CreateOutcome::Created { .. });
                dispatch(&mut state, outcome.into_action());
                if created {
                    fetch(());
                } else {
                    error_timer(());
                }
            }
        }
    });

    // Async delete handler; on success a full re-fetch reflects the removal
    let delete_handler = hooks.use_async_handler({
        let state = state.clone();
        let fetch = fetch_handler.clone();
        let error_timer = error_timer_handler.clone();
        move |id: u64| {
            let mut state = state.clone();
            let fetch = fetch.clone();
            let error_timer = error_timer.clone();
            async move {
                let outcome = match store_from_config() {
                    Ok(store) => remove_todo(&store, id).await,
                    Err(e) => {
                        tracing::warn!("cannot build the API client: {e}");
                        DeleteOutcome::Failed
                    }
                };
                match outcome {
                    DeleteOutcome::Deleted => fetch(()),
                    DeleteOutcome::Failed => {
                        dispatch(&mut state, AppAction::DeleteFailed);
                        error_timer(());
                    }
                }
            }
        }
    });

    // Trigger the initial fetch on startup
    let mut fetch_started = hooks.use_state(|| false);
    if !fetch_started.get() {
        fetch_started.set(true);
        fetch_handler.clone()(());
    }

    // Keyboard event handling
    hooks.use_terminal_events({
        let mut state = state.clone();
        let fetch = fetch_handler.clone();
        let add = add_handler.clone();
        let delete = delete_handler.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let action = {
                    let current = state.read();
                    key_to_action(code, modifiers, &current)
                };
                let Some(action) = action else {
                    return;
                };

                match action {
                    AppAction::Submit => {
                        let (title, can_submit) = {
                            let current = state.read();
                            (
                                current.input_value.trim().to_string(),
                                current.user_id.is_some() && !current.input_disabled,
                            )
                        };
                        dispatch(&mut state, AppAction::Submit);
                        if can_submit && !title.is_empty() {
                            add(title);
                        }
                    }
                    AppAction::DeleteSelected => {
                        let target = state.read().selected_id();
                        dispatch(&mut state, AppAction::DeleteSelected);
                        if let Some(id) = target {
                            delete(id);
                        }
                    }
                    AppAction::Refresh => {
                        fetch(());
                    }
                    other => {
                        dispatch(&mut state, other);
                    }
                }
            }
            _ => {}
        }
    });

    // Exit if requested
    if state.read().should_exit {
        system.exit();
    }

    let vm = compute_view_model(&state.read());

    let input_on_change = {
        let state = state.clone();
        move |value: String| {
            let mut state = state;
            dispatch(&mut state, AppAction::UpdateInput(value));
        }
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(user_id: vm.user_id)

            NewTodoInput(
                value: vm.input.value.clone(),
                disabled: vm.input.disabled,
                focused: vm.input.focused && !vm.input.disabled,
                on_change: input_on_change,
            )

            TodoList(
                rows: vm.rows.clone(),
                pending_row: vm.pending_row.clone(),
                is_loading: vm.is_loading,
            )

            #(vm.footer.as_ref().map(|footer| {
                element! {
                    FilterBar(filter: footer.filter, items_left: footer.items_left)
                }
            }))

            #(render_banner(&vm.banner))

            Footer(shortcuts: vm.shortcuts.clone())
        }
    }
}
