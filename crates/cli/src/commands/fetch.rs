//! Load every collection once and report what landed in the store.

use geduc_content::{ContentConfig, ContentStore};
use geduc_core::Collection;
use tracing::info;

/// Run a one-shot bulk load and print the outcome.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the source cannot be
/// constructed. Per-collection fetch failures do not fail the command -
/// they show up in the summary.
#[allow(clippy::print_stdout)]
pub async fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = ContentConfig::from_env()?;
    let source_kind = if config.api.is_some() { "remote" } else { "mock" };
    info!(source = source_kind, "fetching all collections");

    let store = ContentStore::new(config.source()?, config.ttl.clone());
    store.load_all().await;

    let state = store.state();

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    for collection in Collection::ALL {
        match state.error(collection) {
            Some(error) => println!("{collection:<16} ERROR  {error}"),
            None => println!(
                "{collection:<16} {count:>4} items  fetched {fetched}",
                count = state.item_count(collection),
                fetched = state
                    .last_fetched_at(collection)
                    .map_or_else(|| "never".to_string(), |t| t.to_rfc3339()),
            ),
        }
    }

    let featured = state.featured_team_members().count()
        + state.featured_initiatives().count()
        + state.featured_testimonials().count()
        + state.featured_partners().count();
    println!("featured items across collections: {featured}");

    if state.has_errors() {
        println!("collections in error: {}", state.errors().len());
    }

    Ok(())
}
