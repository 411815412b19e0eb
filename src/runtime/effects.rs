//! Effect execution. Each effect runs as its own task and reports back
//! through the store's intent channel.

use std::time::SystemTime;

use tokio::sync::mpsc::UnboundedSender;

use crate::cache::run_blocking;
use crate::ui::categories::{CategoriesIntent, LoadError};

use super::environment::Environment;
use super::subscription::Subscription;

/// Start the load-then-observe task for one activation.
///
/// The response intent is always sent before the first cache emission.
pub(crate) fn spawn_load(env: Environment, tx: UnboundedSender<CategoriesIntent>) -> Subscription {
    Subscription::new(tokio::spawn(async move {
        let result = load_categories(&env).await;
        if tx.send(CategoriesIntent::CategoriesResponse(result)).is_err() {
            return;
        }

        tracing::debug!("Observing category cache");
        let mut changes = env.cache.subscribe();
        while let Some(categories) = changes.next().await {
            if tx.send(CategoriesIntent::UpdateCategories(categories)).is_err() {
                break;
            }
        }
        tracing::debug!("Stopped observing category cache");
    }))
}

/// Fire-and-forget ad timer. A result arriving after the store is gone is
/// dropped.
pub(crate) fn spawn_watch_ad(
    env: &Environment,
    category_id: uuid::Uuid,
    tx: UnboundedSender<CategoriesIntent>,
) {
    let delay = env.ad_delay;
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(CategoriesIntent::AdWatched { category_id });
    });
}

/// Cache-or-fetch. On success the cache holds the fetched list and the
/// visible list follows through the cache subscription.
///
/// Cache and preference files are touched on the blocking pool.
async fn load_categories(env: &Environment) -> Result<usize, LoadError> {
    let refresh = env.refresh.clone();
    let freshness = env.freshness;
    let fresh = run_blocking(move || refresh.is_fresh(SystemTime::now(), freshness))
        .await
        .unwrap_or(false);
    if fresh {
        let cache = env.cache.clone();
        let cached = run_blocking(move || cache.read_all_sorted_or_empty())
            .await
            .unwrap_or_default();
        tracing::info!(count = cached.len(), "Cache is fresh, skipping fetch");
        return Ok(cached.len());
    }

    let categories = env.feed.fetch_categories().await.map_err(|err| {
        tracing::warn!(kind = err.kind(), error = %err, "Failed to fetch categories");
        LoadError::Network(err.to_string())
    })?;

    let count = categories.len();
    let cache = env.cache.clone();
    let refresh = env.refresh.clone();
    run_blocking(move || match cache.replace_all(&categories) {
        Ok(()) => {
            if let Err(err) = refresh.record_refresh(SystemTime::now()) {
                tracing::warn!(error = %err, "Failed to record refresh time");
            }
        }
        Err(err) => tracing::warn!(error = %err, "Failed to cache fetched categories"),
    })
    .await;
    Ok(count)
}
