pub mod clinic;
pub mod store;

pub use crate::domain::model::{Animal, AnimalId, Owner, OwnerId, Species};
pub use crate::utils::error::Result;
