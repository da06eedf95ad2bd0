use std::path::Path;

use anyhow::Context;

use crate::models::NewPerson;
use crate::store::PeopleStore;

/// Build the store, optionally seeded from a JSON array of people.
pub async fn load_store(seed_file: Option<&Path>) -> anyhow::Result<PeopleStore> {
    let Some(path) = seed_file else {
        return Ok(PeopleStore::new());
    };

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let people: Vec<NewPerson> = serde_json::from_slice(&bytes)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;

    for (idx, person) in people.iter().enumerate() {
        person
            .validate()
            .with_context(|| format!("Invalid seed entry {idx} in {}", path.display()))?;
    }

    tracing::info!(count = people.len(), path = %path.display(), "seeded people store");
    Ok(PeopleStore::seeded(people))
}
