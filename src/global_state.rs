use crate::domain::{Action, AppState, reduce};
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub state: RwSignal<AppState>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals { state: create_rw_signal(AppState::default()) })
}

/// Single write path into the page state.
pub fn dispatch(action: Action) {
    globals()
        .state
        .update(|state| *state = reduce(std::mem::take(state), action));
}

/// Reactive projection of the page state.
pub fn select<T>(f: impl Fn(&AppState) -> T + 'static) -> Memo<T>
where
    T: Clone + PartialEq + 'static,
{
    let state = globals().state;
    create_memo(move |_| state.with(|s| f(s)))
}
