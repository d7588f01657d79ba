use crate::core::LabStore;
use crate::domain::model::{LabId, LabRecord};
use crate::utils::error::Result;
use crate::utils::validation::validate;
use serde_json::{Map, Value};

/// 表單送出的入口：先驗證，再寫入 store
pub struct LabRegistry<S: LabStore> {
    store: S,
}

impl<S: LabStore> LabRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn labs(&self) -> &[LabRecord] {
        self.store.list()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Validates a new-lab form and stores it under a freshly assigned id.
    pub fn submit_new(&mut self, raw: &Map<String, Value>) -> Result<LabRecord> {
        let draft = validate(raw).inspect_err(|errors| {
            tracing::info!("New lab rejected with {} field errors", errors.len());
        })?;

        let record = self.store.insert(draft)?;
        tracing::info!("Registered lab {} ({})", record.id, record.lab_name);
        Ok(record)
    }

    /// Validates an edit form and fully replaces the lab with `id`.
    pub fn submit_edit(&mut self, id: LabId, raw: &Map<String, Value>) -> Result<LabRecord> {
        let draft = validate(raw).inspect_err(|errors| {
            tracing::info!("Edit of lab {} rejected with {} field errors", id, errors.len());
        })?;

        let record = self.store.update(draft.into_record(id))?;
        tracing::info!("Updated lab {} ({})", record.id, record.lab_name);
        Ok(record)
    }
}
