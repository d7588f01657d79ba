pub mod registry;
pub mod store;

pub use crate::domain::model::{LabDraft, LabId, LabRecord, LabStatus, TestMethod};
pub use crate::domain::ports::LabStore;
pub use crate::utils::error::Result;
