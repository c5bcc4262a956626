//! Todo app model types for testable state management
//!
//! This module separates state (AppState) from view (AppViewModel),
//! enabling comprehensive unit testing without the iocraft framework.
//! Network completions are modeled as actions so the whole operation
//! lifecycle runs through the same reducer.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::tui::components::footer::Shortcut;
use crate::types::{FilterMode, Todo};

use super::filter::visible_todos;

/// Banner text when a fetch fails
pub const FETCH_ERROR: &str = "Error 404 unable to get todos";
/// Banner text when a create fails
pub const ADD_ERROR: &str = "Unable to add a todo";
/// Banner text when a delete fails
pub const DELETE_ERROR: &str = "Unable to delete a todo";

/// Seconds before an error banner clears itself
pub const ERROR_CLEAR_SECS: u64 = 3;

// ============================================================================
// State Types
// ============================================================================

/// Raw state that changes during user interaction
#[derive(Debug, Clone)]
pub struct AppState {
    /// Signed-in user owning the list (None when not configured)
    pub user_id: Option<u64>,
    /// Confirmed todos from the server; None until the first fetch settles
    pub todos: Option<Vec<Todo>>,
    /// Optimistic placeholder between a create and the confirming re-fetch
    pub pending_todo: Option<Todo>,
    /// Error banner text
    pub error: Option<String>,

    // New-todo input
    /// Current input text
    pub input_value: String,
    /// Input locked while a create is in flight
    pub input_disabled: bool,
    /// Whether keystrokes go to the input (vs. the list)
    pub input_focused: bool,

    // Delete
    /// Whether a delete is in flight
    pub deleting: bool,
    /// Row showing the busy overlay while deleting
    pub delete_target: Option<u64>,

    // View
    /// Active filter mode
    pub filter: FilterMode,
    /// Filter/footer visibility; latches true on the first non-empty fetch
    pub show_footer: bool,
    /// Selected row in the visible list
    pub selected_index: usize,

    /// Whether the application should exit
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user_id: None,
            todos: None,
            pending_todo: None,
            error: None,
            input_value: String::new(),
            input_disabled: false,
            // The input is focused on startup, ready for a new todo
            input_focused: true,
            deleting: false,
            delete_target: None,
            filter: FilterMode::All,
            show_footer: false,
            selected_index: 0,
            should_exit: false,
        }
    }
}

impl AppState {
    pub fn with_user(user_id: Option<u64>) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }

    /// Visible rows under the active filter
    pub fn visible(&self) -> Vec<Todo> {
        visible_todos(self.todos.as_deref().unwrap_or(&[]), self.filter)
    }

    /// Id of the currently selected visible row
    pub fn selected_id(&self) -> Option<u64> {
        self.visible().get(self.selected_index).map(|t| t.id)
    }
}

// ============================================================================
// Action Types
// ============================================================================

/// All actions on the todo app.
///
/// User intents come from `key_to_action`; the Loaded/Created/Failed
/// variants are dispatched by the async handlers when a network call
/// settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    // Input
    /// Move keyboard focus to the new-todo input
    FocusInput,
    /// Return keyboard focus to the list
    BlurInput,
    /// Replace the input text
    UpdateInput(String),
    /// Submit the input (no-op without a user and a non-empty title)
    Submit,

    // Navigation
    /// Move selection up one row
    MoveUp,
    /// Move selection down one row
    MoveDown,

    // Filter
    /// Select a filter mode
    SetFilter(FilterMode),
    /// Cycle All -> Active -> Completed
    CycleFilter,

    // Operations (async I/O issued by the component)
    /// Re-fetch the full list
    Refresh,
    /// Delete the selected row
    DeleteSelected,

    // Completions
    /// A fetch settled successfully
    TodosLoaded(Vec<Todo>),
    /// A fetch settled with an error
    FetchFailed,
    /// A create was accepted by the server
    TodoCreated { title: String },
    /// A create settled with an error
    CreateFailed,
    /// A delete settled with an error
    DeleteFailed,

    // Error banner
    /// Explicitly dismiss the banner
    DismissError,
    /// A 3-second error timer elapsed. Timers are independent and
    /// uncancelled; whichever fires first clears the banner.
    ErrorTimerElapsed,

    // App
    /// Quit the application
    Quit,
}

// ============================================================================
// View Model Types
// ============================================================================

/// Computed view model for rendering the entire app
#[derive(Debug, Clone)]
pub struct AppViewModel {
    /// Signed-in user shown in the header
    pub user_id: Option<u64>,
    /// Rows under the active filter
    pub rows: Vec<TodoRow>,
    /// Placeholder row for an optimistic add
    pub pending_row: Option<PendingRow>,
    /// New-todo input view model
    pub input: InputViewModel,
    /// Filter bar; None until the first non-empty fetch
    pub footer: Option<FooterViewModel>,
    /// Error banner text
    pub banner: Option<String>,
    /// True until the first fetch settles
    pub is_loading: bool,
    /// Keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
}

/// One confirmed todo row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: u64,
    pub title: String,
    pub completed: bool,
    /// Row is the target of an in-flight delete
    pub busy: bool,
    pub selected: bool,
}

/// The optimistic placeholder row (always busy)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRow {
    pub title: String,
}

/// View model for the new-todo input
#[derive(Debug, Clone)]
pub struct InputViewModel {
    pub value: String,
    pub disabled: bool,
    pub focused: bool,
}

/// View model for the filter bar
#[derive(Debug, Clone)]
pub struct FooterViewModel {
    pub filter: FilterMode,
    /// Count of active (not completed) todos
    pub items_left: usize,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Pure function: compute view model from state
pub fn compute_view_model(state: &AppState) -> AppViewModel {
    let visible = state.visible();

    let rows = visible
        .iter()
        .enumerate()
        .map(|(i, todo)| TodoRow {
            id: todo.id,
            title: todo.title.clone(),
            completed: todo.completed,
            busy: state.deleting && state.delete_target == Some(todo.id),
            selected: !state.input_focused && i == state.selected_index,
        })
        .collect();

    let items_left = state
        .todos
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .filter(|t| !t.completed)
        .count();

    AppViewModel {
        user_id: state.user_id,
        rows,
        pending_row: state
            .pending_todo
            .as_ref()
            .map(|t| PendingRow {
                title: t.title.clone(),
            }),
        input: InputViewModel {
            value: state.input_value.clone(),
            disabled: state.input_disabled,
            focused: state.input_focused,
        },
        footer: state.show_footer.then_some(FooterViewModel {
            filter: state.filter,
            items_left,
        }),
        banner: state.error.clone(),
        is_loading: state.todos.is_none(),
        shortcuts: compute_shortcuts(state),
    }
}

/// Pure function: apply action to state (reducer pattern)
///
/// Contains only pure state transitions. Actions that require network I/O
/// (Refresh, Submit, DeleteSelected) record their intent here; the
/// component issues the actual calls and feeds completions back as
/// actions.
pub fn reduce_app_state(mut state: AppState, action: AppAction) -> AppState {
    let visible_count = state.visible().len();

    match action {
        // Input
        AppAction::FocusInput => {
            state.input_focused = true;
        }
        AppAction::BlurInput => {
            state.input_focused = false;
        }
        AppAction::UpdateInput(value) => {
            if !state.input_disabled {
                state.input_value = value;
            }
        }
        AppAction::Submit => {
            if state.user_id.is_some()
                && !state.input_disabled
                && !state.input_value.trim().is_empty()
            {
                // Lock the input while the create is in flight
                state.input_value.clear();
                state.input_disabled = true;
            }
        }

        // Navigation
        AppAction::MoveUp => {
            state.selected_index = state.selected_index.saturating_sub(1);
        }
        AppAction::MoveDown => {
            if visible_count > 0 {
                state.selected_index = (state.selected_index + 1).min(visible_count - 1);
            }
        }

        // Filter
        AppAction::SetFilter(mode) => {
            if state.show_footer {
                state.filter = mode;
                state.selected_index = 0;
            }
        }
        AppAction::CycleFilter => {
            if state.show_footer {
                state.filter = state.filter.next();
                state.selected_index = 0;
            }
        }

        // Operations
        AppAction::Refresh => {
            // Network call issued by the component
        }
        AppAction::DeleteSelected => {
            if let Some(id) = state.selected_id() {
                state.deleting = true;
                state.delete_target = Some(id);
            }
        }

        // Completions
        AppAction::TodosLoaded(todos) => {
            if !todos.is_empty() {
                state.show_footer = true;
            }
            state.todos = Some(todos);
            // Any fetch completion confirms or discards the optimistic row
            // and ends the delete busy state
            state.pending_todo = None;
            state.deleting = false;
            state.delete_target = None;

            let visible_count = state.visible().len();
            state.selected_index = state
                .selected_index
                .min(visible_count.saturating_sub(1));
        }
        AppAction::FetchFailed => {
            state.error = Some(FETCH_ERROR.to_string());
            state.pending_todo = None;
            state.deleting = false;
            state.delete_target = None;
        }
        AppAction::TodoCreated { title } => {
            if let Some(user_id) = state.user_id {
                state.pending_todo = Some(Todo::pending(user_id, title));
            }
            state.input_disabled = false;
        }
        AppAction::CreateFailed => {
            state.error = Some(ADD_ERROR.to_string());
            state.input_disabled = false;
        }
        AppAction::DeleteFailed => {
            // The busy overlay stays until the next fetch completion
            state.error = Some(DELETE_ERROR.to_string());
        }

        // Error banner
        AppAction::DismissError | AppAction::ErrorTimerElapsed => {
            state.error = None;
        }

        // App
        AppAction::Quit => {
            state.should_exit = true;
        }
    }

    state
}

/// Convert a key event to an AppAction (pure function)
///
/// Focus contexts are checked first: while the input is focused it
/// captures everything except submit/blur/quit, so Enter never reaches
/// the list handlers.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &AppState,
) -> Option<AppAction> {
    if state.input_focused {
        return match (code, modifiers) {
            (KeyCode::Enter, _) => Some(AppAction::Submit),
            (KeyCode::Esc | KeyCode::Tab, _) => Some(AppAction::BlurInput),
            (KeyCode::Char('q'), m) if m.contains(KeyModifiers::CONTROL) => Some(AppAction::Quit),
            // Remaining keys are handled by the text input
            _ => None,
        };
    }

    match (code, modifiers) {
        // Navigation
        (KeyCode::Char('j') | KeyCode::Down, KeyModifiers::NONE) => Some(AppAction::MoveDown),
        (KeyCode::Char('k') | KeyCode::Up, KeyModifiers::NONE) => Some(AppAction::MoveUp),

        // Input
        (KeyCode::Char('n') | KeyCode::Char('i'), KeyModifiers::NONE) => {
            Some(AppAction::FocusInput)
        }

        // Operations
        (KeyCode::Char('x') | KeyCode::Char('d'), KeyModifiers::NONE) => {
            Some(AppAction::DeleteSelected)
        }
        (KeyCode::Char('r'), KeyModifiers::NONE) => Some(AppAction::Refresh),

        // Filter
        (KeyCode::Char('1'), KeyModifiers::NONE) => Some(AppAction::SetFilter(FilterMode::All)),
        (KeyCode::Char('2'), KeyModifiers::NONE) => Some(AppAction::SetFilter(FilterMode::Active)),
        (KeyCode::Char('3'), KeyModifiers::NONE) => {
            Some(AppAction::SetFilter(FilterMode::Completed))
        }
        (KeyCode::Tab, KeyModifiers::NONE) => Some(AppAction::CycleFilter),

        // Esc dismisses the banner when one is showing, otherwise quits
        (KeyCode::Esc, KeyModifiers::NONE) => {
            if state.error.is_some() {
                Some(AppAction::DismissError)
            } else {
                Some(AppAction::Quit)
            }
        }
        (KeyCode::Char('q'), KeyModifiers::NONE) => Some(AppAction::Quit),

        _ => None,
    }
}

/// Shortcuts for the footer bar, sensitive to the focus context
pub fn compute_shortcuts(state: &AppState) -> Vec<Shortcut> {
    if state.input_focused {
        return vec![
            Shortcut::new("Enter", "add"),
            Shortcut::new("Esc", "list"),
            Shortcut::new("C-q", "quit"),
        ];
    }

    let mut shortcuts = vec![
        Shortcut::new("j/k", "nav"),
        Shortcut::new("x", "delete"),
        Shortcut::new("n", "new todo"),
        Shortcut::new("r", "refresh"),
    ];

    if state.show_footer {
        shortcuts.push(Shortcut::new("1/2/3", "filter"));
        shortcuts.push(Shortcut::new("Tab", "cycle filter"));
    }

    if state.error.is_some() {
        shortcuts.push(Shortcut::new("Esc", "dismiss"));
    }

    shortcuts.push(Shortcut::new("q", "quit"));
    shortcuts
}

// ============================================================================
// Tests
// ============================================================================
