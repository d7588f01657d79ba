use crate::domain::model::{LabId, LabRecord};
use crate::utils::error::{LabError, Result};
use crate::utils::validation::validate;
use serde_json::{Map, Value};
use std::path::Path;

/// 從 JSON 檔案載入初始資料
pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<Vec<LabRecord>> {
    let content = std::fs::read_to_string(&path)?;
    tracing::debug!("Loading seed data from {}", path.as_ref().display());
    parse_seed(&content)
}

/// Parses a JSON array of lab objects. Each entry needs a positive integer
/// `id` and must pass the same validation as a form submission.
pub fn parse_seed(content: &str) -> Result<Vec<LabRecord>> {
    let entries: Vec<Value> = serde_json::from_str(content)?;
    let mut records = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let Value::Object(raw) = entry else {
            return Err(LabError::SeedError {
                index,
                message: "entry must be a JSON object".to_string(),
            });
        };

        let id = match raw.get("id").and_then(Value::as_u64) {
            Some(id) if id >= 1 => LabId(id),
            _ => {
                return Err(LabError::SeedError {
                    index,
                    message: "id must be a positive integer".to_string(),
                })
            }
        };

        let draft = validate(raw).map_err(|errors| LabError::SeedError {
            index,
            message: errors.to_string(),
        })?;
        records.push(draft.into_record(id));
    }

    Ok(records)
}

/// 讀取單筆表單資料（JSON 物件），交給驗證層處理
pub fn load_form_file<P: AsRef<Path>>(path: P) -> Result<Map<String, Value>> {
    let content = std::fs::read_to_string(&path)?;
    let value: Value = serde_json::from_str(&content)?;
    match value {
        Value::Object(raw) => Ok(raw),
        _ => Err(LabError::ConfigError {
            message: format!(
                "{} must contain a single JSON object",
                path.as_ref().display()
            ),
        }),
    }
}
