//! Document load state

use tokio::sync::watch;

/// Mirrors the browser's `document.readyState`, collapsed to two states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Complete,
}

/// One-shot signal fired when the document finishes loading
#[derive(Debug)]
pub struct LoadSignal {
    state: watch::Sender<LoadState>,
}

impl LoadSignal {
    pub fn new(initial: LoadState) -> Self {
        let (state, _) = watch::channel(initial);
        Self { state }
    }

    pub fn loading() -> Self {
        Self::new(LoadState::Loading)
    }

    pub fn complete() -> Self {
        Self::new(LoadState::Complete)
    }

    pub fn state(&self) -> LoadState {
        *self.state.borrow()
    }

    /// Fires the load event. Later calls are no-ops.
    pub fn mark_loaded(&self) {
        self.state.send_if_modified(|state| {
            if *state == LoadState::Complete {
                return false;
            }
            *state = LoadState::Complete;
            true
        });
    }

    /// Resolves once the document has loaded, immediately if it already has
    pub async fn wait_loaded(&self) {
        let mut rx = self.state.subscribe();
        while *rx.borrow_and_update() != LoadState::Complete {
            // The sender lives in `self`, so the channel cannot close while waiting
            if rx.changed().await.is_err() {
                return;
            }
        }
    }
}
