use serde::{Deserialize, Serialize};
use std::fmt;

/// 由 store 指派的實驗室識別碼，從 1 開始
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabId(pub u64);

impl LabId {
    pub const FIRST: LabId = LabId(1);

    /// `None` once the id space is used up.
    pub fn next(self) -> Option<LabId> {
        self.0.checked_add(1).map(LabId)
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 1
    }
}

impl fmt::Display for LabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabStatus {
    #[default]
    Active,
    Inactive,
}

impl LabStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabStatus::Active => "Active",
            LabStatus::Inactive => "Inactive",
        }
    }

    pub fn parse(value: &str) -> Option<LabStatus> {
        match value {
            "Active" => Some(LabStatus::Active),
            "Inactive" => Some(LabStatus::Inactive),
            _ => None,
        }
    }
}

impl fmt::Display for LabStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestMethod {
    pub method: String,
    pub parameters: Vec<String>,
    pub sample_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabRecord {
    pub id: LabId,
    pub lab_name: String,
    pub contact_person: String,
    pub contact_number: String,
    pub location: String,
    pub services_offered: Vec<String>,
    pub test_methods: Vec<TestMethod>,
    #[serde(default)]
    pub status: LabStatus,
}

/// 通過驗證但尚未取得 id 的實驗室資料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabDraft {
    pub lab_name: String,
    pub contact_person: String,
    pub contact_number: String,
    pub location: String,
    pub services_offered: Vec<String>,
    pub test_methods: Vec<TestMethod>,
    pub status: LabStatus,
}

impl LabDraft {
    pub fn into_record(self, id: LabId) -> LabRecord {
        LabRecord {
            id,
            lab_name: self.lab_name,
            contact_person: self.contact_person,
            contact_number: self.contact_number,
            location: self.location,
            services_offered: self.services_offered,
            test_methods: self.test_methods,
            status: self.status,
        }
    }
}

impl From<LabRecord> for LabDraft {
    fn from(record: LabRecord) -> Self {
        LabDraft {
            lab_name: record.lab_name,
            contact_person: record.contact_person,
            contact_number: record.contact_number,
            location: record.location,
            services_offered: record.services_offered,
            test_methods: record.test_methods,
            status: record.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_uses_camel_case_field_names() {
        let json = serde_json::json!({
            "id": 1,
            "labName": "Viswa Lab Chennai",
            "contactPerson": "Dr. Ramesh",
            "contactNumber": "9876543210",
            "location": "Chennai",
            "servicesOffered": ["Oil Testing"],
            "testMethods": [
                {"method": "ASTM D445", "parameters": ["Viscosity"], "sampleType": "Oil"}
            ]
        });

        let record: LabRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.id, LabId(1));
        assert_eq!(record.status, LabStatus::Active);
        assert_eq!(record.test_methods[0].sample_type, "Oil");

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["status"], "Active");
        assert_eq!(back["testMethods"][0]["sampleType"], "Oil");
    }

    #[test]
    fn test_next_id_stops_at_u64_max() {
        assert_eq!(LabId(1).next(), Some(LabId(2)));
        assert_eq!(LabId(u64::MAX).next(), None);
        assert!(!LabId(0).is_valid());
    }

    #[test]
    fn test_status_parse_is_exact() {
        assert_eq!(LabStatus::parse("Inactive"), Some(LabStatus::Inactive));
        assert_eq!(LabStatus::parse("active"), None);
        assert_eq!(LabStatus::parse(""), None);
    }
}
