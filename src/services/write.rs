use std::sync::Arc;

use crate::cache::keys::CACHED_USERS_KEY;
use crate::cache::UserCache;
use crate::error::AppError;
use crate::store::UserStore;

/// A validated registration, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub age: i32,
}

impl NewUser {
    /// Validates raw form input. Every field is required and non-empty, and
    /// the age must be an integer (the column it lands in is INTEGER).
    pub fn parse(
        name: Option<String>,
        surname: Option<String>,
        age: Option<String>,
    ) -> Result<Self, AppError> {
        let name = required("name", name)?;
        let surname = required("surname", surname)?;
        let age = required("age", age)?;
        let age: i32 = age
            .parse()
            .map_err(|_| AppError::Validation(format!("age must be an integer, got '{age}'")))?;

        Ok(NewUser { name, surname, age })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(AppError::Validation(format!("missing required field '{field}'"))),
    }
}

/// Inserts registrations and keeps the listing cache coherent by deleting
/// its key after every successful write. There is no write-back; the next
/// read repopulates the cache from the store.
#[derive(Clone)]
pub struct WriteService {
    store: Arc<dyn UserStore>,
    cache: Option<Arc<dyn UserCache>>,
}

impl WriteService {
    pub fn new(store: Arc<dyn UserStore>, cache: Option<Arc<dyn UserCache>>) -> Self {
        Self { store, cache }
    }

    pub async fn create_user(&self, user: NewUser) -> Result<i32, AppError> {
        self.store.ensure_table().await?;
        let id = self
            .store
            .insert_user(&user.name, &user.surname, user.age)
            .await?;

        if let Some(cache) = &self.cache {
            cache.delete(CACHED_USERS_KEY).await?;
        }

        tracing::info!(id, "registered user");
        Ok(id)
    }
}
