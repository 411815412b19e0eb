//! Single owner of [`CategoriesState`].
//!
//! Intents from the presentation layer and from effects share one channel;
//! a single task folds them through [`CategoriesReducer`] in arrival order
//! and publishes every new state.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::ui::categories::{CategoriesEffect, CategoriesIntent, CategoriesReducer, CategoriesState};
use crate::ui::mvi::Reducer;

use super::effects::{spawn_load, spawn_watch_ad};
use super::environment::Environment;
use super::subscription::Subscription;

pub struct Store {
    intents: mpsc::UnboundedSender<CategoriesIntent>,
    state: watch::Receiver<CategoriesState>,
    task: JoinHandle<()>,
}

impl Store {
    /// Start the intent loop on the current tokio runtime.
    pub fn spawn(env: Environment) -> Self {
        let (intents, rx) = mpsc::unbounded_channel();
        let (state_tx, state) = watch::channel(CategoriesState::default());
        let task = tokio::spawn(run(env, intents.clone(), rx, state_tx));
        Self {
            intents,
            state,
            task,
        }
    }

    pub fn send(&self, intent: CategoriesIntent) {
        if self.intents.send(intent).is_err() {
            tracing::debug!("Store loop has stopped; intent dropped");
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CategoriesState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn watch(&self) -> watch::Receiver<CategoriesState> {
        self.state.clone()
    }

    /// Wait until the published state satisfies `predicate`.
    pub async fn wait_for(&self, predicate: impl FnMut(&CategoriesState) -> bool) -> CategoriesState {
        let mut rx = self.state.clone();
        if let Ok(state) = rx.wait_for(predicate).await {
            return state.clone();
        }
        let last = rx.borrow().clone();
        last
    }

    /// Stop the loop and every subscription it owns.
    pub fn shutdown(self) {
        drop(self);
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    env: Environment,
    tx: mpsc::UnboundedSender<CategoriesIntent>,
    mut rx: mpsc::UnboundedReceiver<CategoriesIntent>,
    state_tx: watch::Sender<CategoriesState>,
) {
    let mut state = CategoriesState::default();
    // Dropped (and so cancelled) when replaced or when this task ends.
    let mut cache_subscription: Option<Subscription> = None;

    while let Some(intent) = rx.recv().await {
        tracing::trace!(?intent, "Reducing intent");
        let (next, effect) = CategoriesReducer::reduce(state, intent);
        state = next;
        state_tx.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state.clone();
                true
            }
        });

        match effect {
            Some(CategoriesEffect::LoadCategories) => {
                if cache_subscription.take().is_some() {
                    tracing::debug!("Restarting category load");
                }
                cache_subscription = Some(spawn_load(env.clone(), tx.clone()));
            }
            Some(CategoriesEffect::WatchAd { category_id }) => {
                tracing::info!(%category_id, "Showing simulated ad");
                spawn_watch_ad(&env, category_id, tx.clone());
            }
            None => {}
        }
    }
}
