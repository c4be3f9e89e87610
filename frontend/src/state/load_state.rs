use crate::{
    api::ResourceLoadFailure,
    state::diagnostics::{use_diagnostics, DiagnosticEvent, Diagnostics},
};
use leptos::*;
use std::future::Future;

/// Progress of a fetching panel. Created as `Loading` at mount and moved to
/// one of the terminal variants exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Fallback,
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Applies a terminal state. Returns `false` when the state already settled
/// or its owner has been disposed, in which case `next` is dropped.
pub fn settle<T: 'static>(state: RwSignal<LoadState<T>>, next: LoadState<T>) -> bool {
    match state.try_with_untracked(LoadState::is_loading) {
        Some(true) => state.try_set(next).is_none(),
        Some(false) => {
            log::debug!("Load state already settled; ignoring late result");
            false
        }
        None => {
            log::debug!("Panel unmounted before its load finished; discarding result");
            false
        }
    }
}

pub async fn load_once<T, Fut>(
    state: RwSignal<LoadState<T>>,
    diagnostics: Diagnostics,
    fetch: Fut,
) -> bool
where
    T: 'static,
    Fut: Future<Output = Result<T, ResourceLoadFailure>>,
{
    let next = match fetch.await {
        Ok(payload) => LoadState::Ready(payload),
        Err(error) => {
            diagnostics.emit(DiagnosticEvent::load_failed(error));
            LoadState::Fallback
        }
    };
    settle(state, next)
}

/// Builds the read for the mount effect's first run. Any later run (a
/// re-render) returns `None`, so a panel issues at most one read per mount.
pub fn start_on_first_run<T, F, Fut>(
    started: Option<()>,
    state: RwSignal<LoadState<T>>,
    diagnostics: &Diagnostics,
    fetch: &F,
) -> Option<impl Future<Output = bool>>
where
    T: 'static,
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ResourceLoadFailure>>,
{
    if started.is_some() {
        return None;
    }
    Some(load_once(state, diagnostics.clone(), fetch()))
}

/// Creates a `Loading` state owned by the calling component and starts the
/// read once the component is mounted.
pub fn use_load_on_mount<T, F, Fut>(fetch: F) -> RwSignal<LoadState<T>>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ResourceLoadFailure>> + 'static,
{
    let state = create_rw_signal(LoadState::Loading);
    let diagnostics = use_diagnostics();

    create_effect(move |started: Option<()>| {
        if let Some(load) = start_on_first_run(started, state, &diagnostics, &fetch) {
            spawn_local(async move {
                load.await;
            });
        }
    });

    state
}
