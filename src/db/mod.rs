//! Database layer (Firestore, plus an in-memory fake for tests).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

use crate::error::AppError;
use crate::models::AthleteRecord;

/// Collection names as constants.
pub mod collections {
    /// One document per athlete, keyed by athlete id.
    pub const ATHLETES: &str = "athletes";
}

/// Storage backend handle shared across handlers.
///
/// The Memory variant backs tests and offline development; both variants
/// expose the same three operations the ingestion path needs.
#[derive(Clone)]
pub enum AthleteStore {
    Firestore(FirestoreDb),
    Memory(MemoryStore),
}

impl AthleteStore {
    /// Fetch one athlete document, `None` if it does not exist.
    pub async fn get_athlete(&self, id: &str) -> Result<Option<AthleteRecord>, AppError> {
        match self {
            AthleteStore::Firestore(db) => db.get_athlete(id).await,
            AthleteStore::Memory(store) => Ok(store.get_athlete(id)),
        }
    }

    /// Replace an athlete document wholesale (create if absent).
    pub async fn set_athlete(&self, record: &AthleteRecord) -> Result<(), AppError> {
        match self {
            AthleteStore::Firestore(db) => db.set_athlete(record).await,
            AthleteStore::Memory(store) => {
                store.set_athlete(record);
                Ok(())
            }
        }
    }

    /// Every persisted athlete document, no ordering guarantee.
    pub async fn list_athletes(&self) -> Result<Vec<AthleteRecord>, AppError> {
        match self {
            AthleteStore::Firestore(db) => db.list_athletes().await,
            AthleteStore::Memory(store) => Ok(store.list_athletes()),
        }
    }
}
