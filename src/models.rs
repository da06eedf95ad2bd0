use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
}

/// Body accepted by create and update. Unknown fields (including `id`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
}

impl NewPerson {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.first_name.trim().is_empty() {
            return Err(ApiError::Validation("firstName must not be blank".into()));
        }
        if self.last_name.trim().is_empty() {
            return Err(ApiError::Validation("lastName must not be blank".into()));
        }
        Ok(())
    }

    pub(crate) fn into_person(self, id: u64) -> Person {
        Person {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
        }
    }
}
