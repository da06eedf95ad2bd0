use opentelemetry::{global, metrics::Counter};

use crate::store::PeopleStore;

#[derive(Clone)]
pub struct AppState {
    pub store: PeopleStore,
    pub people_created: Counter<u64>,
    pub people_deleted: Counter<u64>,
}

impl AppState {
    /// Counters come from the global meter provider, which is a no-op until
    /// telemetry installs an exporter.
    pub fn new(store: PeopleStore) -> Self {
        let meter = global::meter("people-api");
        Self {
            store,
            people_created: meter
                .u64_counter("people.created")
                .with_description("People records created")
                .build(),
            people_deleted: meter
                .u64_counter("people.deleted")
                .with_description("People records deleted")
                .build(),
        }
    }
}
