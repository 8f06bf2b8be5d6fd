pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::CliConfig, Settings};
pub use crate::core::clinic::Clinic;
pub use crate::core::store::{LoadOutcome, SampleReason, StorePaths};
pub use crate::domain::model::{Animal, AnimalId, Owner, OwnerId, Species};
pub use crate::utils::error::{ClinicError, Result};
