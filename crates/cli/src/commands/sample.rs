//! Generate fixture entities and print them, without touching the store.

use geduc_content::source::generate_fixtures;
use geduc_content::CollectionPayload;
use geduc_core::Collection;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Print `count` generated entities for `collection` as pretty JSON.
///
/// # Errors
///
/// Returns an error if the collection name is unknown or serialization
/// fails.
#[allow(clippy::print_stdout)]
pub fn run(collection: &str, count: usize, seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let collection: Collection = collection.parse()?;

    let mut rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let payload = generate_fixtures(collection, count, &mut rng);

    println!("{}", payload_to_json(&payload)?);
    Ok(())
}

fn payload_to_json(payload: &CollectionPayload) -> Result<String, serde_json::Error> {
    match payload {
        CollectionPayload::TeamMembers(items) => serde_json::to_string_pretty(items),
        CollectionPayload::Initiatives(items) => serde_json::to_string_pretty(items),
        CollectionPayload::Testimonials(items) => serde_json::to_string_pretty(items),
        CollectionPayload::FaqItems(items) => serde_json::to_string_pretty(items),
        CollectionPayload::FeaturedMedia(items) => serde_json::to_string_pretty(items),
        CollectionPayload::Partners(items) => serde_json::to_string_pretty(items),
    }
}
