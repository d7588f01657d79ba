use crate::core::LabStore;
use crate::domain::model::{LabId, LabRecord};
use crate::utils::error::{LabError, Result};
use crate::utils::validation::validate_record;
use std::collections::HashSet;

/// 記憶體中的實驗室清單，保留插入順序。程序結束即消失。
#[derive(Debug, Clone, Default)]
pub struct InMemoryLabStore {
    labs: Vec<LabRecord>,
}

impl InMemoryLabStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the store from a startup dataset. Duplicate ids or records
    /// breaking the lab invariants are rejected.
    pub fn from_seed(records: Vec<LabRecord>) -> Result<Self> {
        let mut store = Self::new();
        store.replace_all(records)?;
        tracing::info!("Seeded lab store with {} records", store.labs.len());
        Ok(store)
    }

    /// Swaps in a whole new collection. On error the store is left as it was.
    pub fn replace_all(&mut self, records: Vec<LabRecord>) -> Result<()> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            check_id(record.id)?;
            if !seen.insert(record.id) {
                tracing::warn!("Rejected collection with duplicate lab id {}", record.id);
                return Err(LabError::DuplicateId { id: record.id });
            }
            validate_record(record)?;
        }
        self.labs = records;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.labs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labs.is_empty()
    }

    fn position(&self, id: LabId) -> Option<usize> {
        self.labs.iter().position(|lab| lab.id == id)
    }
}

fn check_id(id: LabId) -> Result<()> {
    if !id.is_valid() {
        tracing::warn!("Rejected lab id {}: ids start at 1", id);
        return Err(LabError::InvalidId { id });
    }
    Ok(())
}

impl LabStore for InMemoryLabStore {
    fn list(&self) -> &[LabRecord] {
        &self.labs
    }

    fn get(&self, id: LabId) -> Option<&LabRecord> {
        self.labs.iter().find(|lab| lab.id == id)
    }

    fn add(&mut self, record: LabRecord) -> Result<LabRecord> {
        check_id(record.id)?;
        if self.position(record.id).is_some() {
            tracing::warn!("Rejected add: lab id {} already exists", record.id);
            return Err(LabError::DuplicateId { id: record.id });
        }
        validate_record(&record)?;

        tracing::debug!("Added lab {} ({})", record.id, record.lab_name);
        self.labs.push(record.clone());
        Ok(record)
    }

    fn update(&mut self, record: LabRecord) -> Result<LabRecord> {
        check_id(record.id)?;
        let Some(index) = self.position(record.id) else {
            tracing::warn!("Rejected update: lab id {} not found", record.id);
            return Err(LabError::NotFound { id: record.id });
        };
        validate_record(&record)?;

        tracing::debug!("Replaced lab {} at position {}", record.id, index);
        self.labs[index] = record.clone();
        Ok(record)
    }
}
