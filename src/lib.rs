pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::Settings;
pub use core::{registry::LabRegistry, store::InMemoryLabStore, LabStore};
pub use domain::model::{LabDraft, LabId, LabRecord, LabStatus, TestMethod};
pub use utils::error::{LabError, Result};
pub use utils::validation::{validate, FieldError, ValidationErrors};
