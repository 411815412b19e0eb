use std::io::Write;

use anyhow::{anyhow, bail, Context, Result};

use crate::model::Category;
use crate::runtime::{Environment, Store};
use crate::ui::categories::{AlertState, CategoriesIntent, CategoriesState};
use crate::ui::facts::{FactsIntent, FactsState};

use super::Command;

/// Run one command against `env`, writing human-readable output to `out`.
pub async fn execute(command: Command, env: Environment, out: &mut impl Write) -> Result<()> {
    match command {
        Command::List { refresh } => list(env, refresh, out).await,
        Command::Facts {
            title,
            index,
            watch_ad,
        } => {
            let (store, session) = open_category(env, &title, index, watch_ad, out).await?;
            writeln!(out, "{}", format_fact_view(&session))?;
            store.send(CategoriesIntent::DestinationDismissed);
            Ok(())
        }
        Command::Share {
            title,
            index,
            watch_ad,
        } => {
            let (store, _) = open_category(env, &title, index, watch_ad, out).await?;
            store.send(CategoriesIntent::Facts(FactsIntent::ShareFact));
            let state = store
                .wait_for(|s| s.destination.as_ref().is_some_and(|d| d.is_share_presented))
                .await;
            let text = state
                .destination
                .as_ref()
                .and_then(FactsState::share_text)
                .ok_or_else(|| anyhow!("'{}' has no facts to share", title))?;
            writeln!(out, "{}", text)?;
            store.send(CategoriesIntent::Facts(FactsIntent::ShareSheetDismissed));
            Ok(())
        }
        Command::ClearCache => {
            env.cache.clear().context("Failed to clear cache")?;
            env.refresh.reset().context("Failed to reset refresh time")?;
            writeln!(out, "Cache cleared")?;
            Ok(())
        }
    }
}

async fn list(env: Environment, refresh: bool, out: &mut impl Write) -> Result<()> {
    let (_store, state) = open_session(env, refresh).await?;
    report_load(&state, out)?;
    for category in &state.categories {
        writeln!(out, "{}", format_category_line(category))?;
    }
    Ok(())
}

/// Activate a store and wait until the load attempt has finished and the
/// cache has delivered its contents.
async fn open_session(env: Environment, refresh: bool) -> Result<(Store, CategoriesState)> {
    if refresh {
        env.refresh.reset().context("Failed to reset refresh time")?;
    }
    let store = Store::spawn(env);
    store.send(CategoriesIntent::OnAppear);
    let state = store
        .wait_for(|s| !s.is_loading && s.has_cache_snapshot && (s.has_loaded || s.error.is_some()))
        .await;
    Ok((store, state))
}

/// A failed load with nothing cached is fatal; with a cached list it is a
/// warning.
fn report_load(state: &CategoriesState, out: &mut impl Write) -> Result<()> {
    if let Some(error) = &state.error {
        if state.categories.is_empty() {
            bail!("{}", error);
        }
        writeln!(out, "warning: {} (showing cached categories)", error)?;
    }
    Ok(())
}

async fn open_category(
    env: Environment,
    title: &str,
    index: Option<i64>,
    watch_ad: bool,
    out: &mut impl Write,
) -> Result<(Store, FactsState)> {
    let (store, state) = open_session(env, false).await?;
    report_load(&state, out)?;

    let category = state
        .find(title)
        .cloned()
        .ok_or_else(|| anyhow!("No category named '{}'", title))?;
    store.send(CategoriesIntent::CategoryTapped(category));
    let mut state = store
        .wait_for(|s| s.destination.is_some() || s.alert.is_some())
        .await;

    if let Some(alert) = state.alert.clone() {
        match alert {
            AlertState::RequiresUnlock { .. } if watch_ad => {
                writeln!(out, "Watching ad...")?;
                store.send(CategoriesIntent::ShowAd);
                state = store.wait_for(|s| s.alert.is_none() && !s.is_loading).await;
                if state.destination.is_none() {
                    bail!("No premium category is available to unlock");
                }
            }
            AlertState::RequiresUnlock { .. } => {
                store.send(CategoriesIntent::AlertDismissed);
                bail!("{} (pass --watch-ad to unlock)", alert.title());
            }
            AlertState::ComingSoon { .. } => {
                store.send(CategoriesIntent::AlertDismissed);
                bail!("{}: '{}' has no facts yet", alert.title(), title);
            }
        }
    }

    let mut session = state
        .destination
        .ok_or_else(|| anyhow!("Could not open '{}'", title))?;

    if let Some(index) = index {
        let expected = index.clamp(0, session.last_index() as i64) as usize;
        store.send(CategoriesIntent::Facts(FactsIntent::SetCurrentFact(index)));
        let state = store
            .wait_for(|s| {
                s.destination
                    .as_ref()
                    .is_some_and(|d| d.current_fact_index == expected)
            })
            .await;
        if let Some(updated) = state.destination {
            session = updated;
        }
    }

    Ok((store, session))
}

/// One line per category: order, title, tier and fact count.
pub fn format_category_line(category: &Category) -> String {
    let facts = match category.fact_count() {
        1 => "1 fact".to_string(),
        n => format!("{} facts", n),
    };
    format!(
        "{:>3}. {} [{}] {}: {}",
        category.order,
        category.title,
        category.status.display_name(),
        facts,
        category.description
    )
}

/// The visible card of a browsing session.
pub fn format_fact_view(session: &FactsState) -> String {
    let Some(fact) = session.current_fact() else {
        return format!("{}: no facts", session.category.title);
    };
    let mut view = format!(
        "{} ({}/{})\n{}",
        session.category.title,
        session.current_fact_index + 1,
        session.category.fact_count(),
        fact.fact
    );
    if fact.has_image() {
        view.push_str(&format!("\nimage: {}", fact.image));
    }
    view
}
