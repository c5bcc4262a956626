//! End-to-end flow tests for the todo app
//!
//! These tests complement the unit tests in `src/tui/app/model.rs` by
//! driving whole operation lifecycles: a scripted store runs the async
//! operation, its outcome becomes an action, and the reducer applies it.
//! Rendering is asserted through the computed view model.

mod common;

use common::mock_data::{MockStore, TodoBuilder, mock_todo};
use tudo::tui::app::model::{
    ADD_ERROR, AppAction, AppState, DELETE_ERROR, FETCH_ERROR, compute_view_model,
    key_to_action, reduce_app_state,
};
use tudo::tui::app::operations::{CreateOutcome, load_todos, remove_todo, submit_todo};
use tudo::tui::app::visible_todos;
use tudo::types::{FilterMode, PENDING_TODO_ID};

use iocraft::prelude::{KeyCode, KeyModifiers};

const USER: u64 = 7;

fn signed_in_state() -> AppState {
    let mut state = AppState::with_user(Some(USER));
    state.input_focused = false;
    state
}

/// Run a fetch against the store and apply its completion to the state
async fn settle_fetch(state: AppState, store: &MockStore) -> AppState {
    let action = load_todos(store, USER).await.into_action();
    reduce_app_state(state, action)
}

// ============================================================================
// Filter Projection
// ============================================================================

#[test]
fn test_visible_items_satisfy_mode_predicate_in_order() {
    let todos = vec![
        mock_todo(1, "Buy milk", false),
        mock_todo(2, "Walk the dog", true),
        mock_todo(3, "Water plants", false),
        mock_todo(4, "File taxes", true),
    ];

    assert_eq!(visible_todos(&todos, FilterMode::All), todos);

    let active: Vec<u64> = visible_todos(&todos, FilterMode::Active)
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(active, vec![1, 3]);

    let completed: Vec<u64> = visible_todos(&todos, FilterMode::Completed)
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(completed, vec![2, 4]);
}

#[test]
fn test_view_model_rows_track_filter_changes() {
    let mut state = signed_in_state();
    state = reduce_app_state(
        state,
        AppAction::TodosLoaded(vec![
            mock_todo(1, "Buy milk", false),
            mock_todo(2, "Walk the dog", true),
        ]),
    );

    state = reduce_app_state(state, AppAction::SetFilter(FilterMode::Completed));
    let vm = compute_view_model(&state);
    let ids: Vec<u64> = vm.rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2]);

    state = reduce_app_state(state, AppAction::SetFilter(FilterMode::All));
    let vm = compute_view_model(&state);
    assert_eq!(vm.rows.len(), 2);
}

// ============================================================================
// Initial Load
// ============================================================================

#[tokio::test]
async fn test_empty_initial_list_keeps_footer_hidden() {
    let store = MockStore::empty();
    let state = settle_fetch(signed_in_state(), &store).await;

    assert!(!state.show_footer);
    let vm = compute_view_model(&state);
    assert!(vm.footer.is_none());
    assert!(!vm.is_loading);
}

#[tokio::test]
async fn test_nonempty_initial_list_shows_footer() {
    let store = MockStore::with_todos(vec![mock_todo(1, "Buy milk", false)]);
    let state = settle_fetch(signed_in_state(), &store).await;

    assert!(state.show_footer);
    let vm = compute_view_model(&state);
    assert_eq!(vm.footer.unwrap().items_left, 1);
}

#[tokio::test]
async fn test_fetch_failure_sets_exact_banner_text() {
    let store = MockStore::empty().failing("fetch");
    let state = settle_fetch(signed_in_state(), &store).await;

    assert_eq!(state.error.as_deref(), Some("Error 404 unable to get todos"));
    assert_eq!(state.error.as_deref(), Some(FETCH_ERROR));
}

#[tokio::test]
async fn test_fetch_ignores_other_users_todos() {
    let store = MockStore::with_todos(vec![
        mock_todo(1, "Mine", false),
        TodoBuilder::new(2).user(99).title("Not mine").build(),
    ]);
    let state = settle_fetch(signed_in_state(), &store).await;

    let todos = state.todos.as_ref().unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].title, "Mine");
}

// ============================================================================
// Add Flow
// ============================================================================

#[tokio::test]
async fn test_add_shows_placeholder_once_until_refetch_resolves() {
    let store = MockStore::empty();

    // Type the title and submit
    let mut state = signed_in_state();
    state = reduce_app_state(state, AppAction::FocusInput);
    state = reduce_app_state(state, AppAction::UpdateInput("Buy milk".to_string()));
    let title = state.input_value.trim().to_string();
    state = reduce_app_state(state, AppAction::Submit);
    assert!(state.input_disabled);
    assert!(state.input_value.is_empty());

    // The create succeeds but the re-fetch has not resolved yet
    let outcome = submit_todo(&store, title, USER).await;
    assert!(matches!(outcome, CreateOutcome::Created { .. }));
    state = reduce_app_state(state, outcome.into_action());

    let vm = compute_view_model(&state);
    let pending = vm.pending_row.expect("placeholder row should be visible");
    assert_eq!(pending.title, "Buy milk");
    // Exactly once: the confirmed rows never contain the placeholder
    assert!(vm.rows.iter().all(|r| r.id != PENDING_TODO_ID));
    assert!(!state.input_disabled);

    // The re-fetch resolves and replaces the placeholder with the
    // confirmed item
    state = settle_fetch(state, &store).await;
    let vm = compute_view_model(&state);
    assert!(vm.pending_row.is_none());
    assert_eq!(vm.rows.len(), 1);
    assert_eq!(vm.rows[0].title, "Buy milk");
    assert_ne!(vm.rows[0].id, PENDING_TODO_ID);
}

#[tokio::test]
async fn test_pending_cleared_even_when_refetch_fails() {
    let mut store = MockStore::empty();

    let mut state = signed_in_state();
    state = reduce_app_state(state, AppAction::UpdateInput("Buy milk".to_string()));
    let title = state.input_value.clone();
    state = reduce_app_state(state, AppAction::Submit);

    let outcome = submit_todo(&store, title, USER).await;
    state = reduce_app_state(state, outcome.into_action());
    assert!(state.pending_todo.is_some());

    // The confirming re-fetch fails; the placeholder still goes away
    store.fail_fetch = true;
    state = settle_fetch(state, &store).await;
    assert!(state.pending_todo.is_none());
    assert_eq!(state.error.as_deref(), Some(FETCH_ERROR));
}

#[tokio::test]
async fn test_add_failure_sets_exact_banner_and_unlocks_input() {
    let store = MockStore::empty().failing("create");

    let mut state = signed_in_state();
    state = reduce_app_state(state, AppAction::UpdateInput("Buy milk".to_string()));
    let title = state.input_value.clone();
    state = reduce_app_state(state, AppAction::Submit);

    let outcome = submit_todo(&store, title, USER).await;
    state = reduce_app_state(state, outcome.into_action());

    assert_eq!(state.error.as_deref(), Some("Unable to add a todo"));
    assert_eq!(state.error.as_deref(), Some(ADD_ERROR));
    assert!(!state.input_disabled);
    assert!(state.pending_todo.is_none());
}

// ============================================================================
// Delete Flow
// ============================================================================

#[tokio::test]
async fn test_delete_then_refetch_excludes_deleted_id() {
    let store = MockStore::with_todos(vec![
        mock_todo(1, "Buy milk", false),
        mock_todo(2, "Walk the dog", true),
    ]);

    let mut state = settle_fetch(signed_in_state(), &store).await;

    // Delete the selected row (id 1) and watch the busy overlay
    state = reduce_app_state(state, AppAction::DeleteSelected);
    assert_eq!(state.delete_target, Some(1));
    let vm = compute_view_model(&state);
    assert!(vm.rows.iter().any(|r| r.id == 1 && r.busy));

    remove_todo(&store, 1).await;
    state = settle_fetch(state, &store).await;

    let vm = compute_view_model(&state);
    assert!(vm.rows.iter().all(|r| r.id != 1));
    assert_eq!(vm.rows.len(), 1);
    assert!(!state.deleting);
}

#[tokio::test]
async fn test_delete_failure_sets_exact_banner_text() {
    let store = MockStore::with_todos(vec![mock_todo(1, "Buy milk", false)]).failing("delete");

    let mut state = settle_fetch(signed_in_state(), &store).await;
    state = reduce_app_state(state, AppAction::DeleteSelected);

    let outcome = remove_todo(&store, 1).await;
    assert_eq!(outcome, tudo::tui::app::operations::DeleteOutcome::Failed);
    state = reduce_app_state(state, AppAction::DeleteFailed);

    assert_eq!(state.error.as_deref(), Some("Unable to delete a todo"));
    assert_eq!(state.error.as_deref(), Some(DELETE_ERROR));
}

// ============================================================================
// Error Banner
// ============================================================================

#[test]
fn test_dismiss_clears_banner_regardless_of_timer() {
    let mut state = signed_in_state();
    state = reduce_app_state(state, AppAction::FetchFailed);
    assert!(state.error.is_some());

    // Esc maps to dismissal while the banner shows, and the banner goes
    // away immediately; the pending timer firing later is a no-op
    assert_eq!(
        key_to_action(KeyCode::Esc, KeyModifiers::NONE, &state),
        Some(AppAction::DismissError)
    );
    state = reduce_app_state(state, AppAction::DismissError);
    assert!(state.error.is_none());

    state = reduce_app_state(state, AppAction::ErrorTimerElapsed);
    assert!(state.error.is_none());
}

#[test]
fn test_stale_timer_erases_newer_error() {
    // Timers are independent and uncancelled: a timer scheduled for an
    // earlier error clears whichever banner is showing when it fires
    let mut state = signed_in_state();
    state = reduce_app_state(state, AppAction::FetchFailed);
    state = reduce_app_state(state, AppAction::CreateFailed);
    assert_eq!(state.error.as_deref(), Some(ADD_ERROR));

    state = reduce_app_state(state, AppAction::ErrorTimerElapsed);
    assert!(state.error.is_none());
}

// ============================================================================
// Session Guard
// ============================================================================

#[test]
fn test_submit_without_user_is_inert() {
    let mut state = AppState::with_user(None);
    state = reduce_app_state(state, AppAction::UpdateInput("Buy milk".to_string()));
    state = reduce_app_state(state, AppAction::Submit);

    assert!(!state.input_disabled);
    assert_eq!(state.input_value, "Buy milk");
}
