use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{NewPerson, Person};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("person {0} not found")]
    NotFound(u64),
}

/// In-memory, insertion-ordered collection of people.
///
/// Cloning is cheap and every clone shares the same collection. Each operation
/// holds the lock for its full duration, so mutations never interleave.
#[derive(Clone, Default)]
pub struct PeopleStore {
    inner: Arc<RwLock<Directory>>,
}

struct Directory {
    people: Vec<Person>,
    next_id: u64,
}

impl Default for Directory {
    fn default() -> Self {
        Self {
            people: Vec::new(),
            next_id: 1,
        }
    }
}

impl Directory {
    fn insert(&mut self, new: NewPerson) -> Person {
        let person = new.into_person(self.next_id);
        self.next_id += 1;
        self.people.push(person.clone());
        person
    }

    fn position(&self, id: u64) -> Result<usize, StoreError> {
        self.people
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

impl PeopleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated in iteration order, with ids starting at 1.
    pub fn seeded(people: impl IntoIterator<Item = NewPerson>) -> Self {
        let mut dir = Directory::default();
        for person in people {
            dir.insert(person);
        }
        Self {
            inner: Arc::new(RwLock::new(dir)),
        }
    }

    pub async fn list(&self) -> Vec<Person> {
        self.inner.read().await.people.clone()
    }

    pub async fn get(&self, id: u64) -> Result<Person, StoreError> {
        let dir = self.inner.read().await;
        let idx = dir.position(id)?;
        Ok(dir.people[idx].clone())
    }

    pub async fn create(&self, new: NewPerson) -> Person {
        self.inner.write().await.insert(new)
    }

    /// Replace every field except `id`, keeping the record's position.
    pub async fn update(&self, id: u64, new: NewPerson) -> Result<Person, StoreError> {
        let mut dir = self.inner.write().await;
        let idx = dir.position(id)?;
        let person = new.into_person(id);
        dir.people[idx] = person.clone();
        Ok(person)
    }

    /// Remove a record and return it. Ids are never handed out again.
    pub async fn delete(&self, id: u64) -> Result<Person, StoreError> {
        let mut dir = self.inner.write().await;
        let idx = dir.position(id)?;
        Ok(dir.people.remove(idx))
    }
}
