use crate::domain::model::{LabDraft, LabRecord, LabStatus, TestMethod};
use crate::utils::error::{LabError, Result};
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

pub const MIN_TEXT_LENGTH: usize = 3;

static CONTACT_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("contact number pattern compiles"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// 所有欄位錯誤，依檢查順序排列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Distinct field paths, in first-reported order.
    pub fn fields(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.0
            .iter()
            .map(|e| e.field.as_str())
            .filter(|field| seen.insert(*field))
            .collect()
    }

    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.0.iter().filter(move |e| e.field == field)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationErrors {}

/// 將未經型別檢查的表單資料轉成 `LabDraft`。
///
/// Every rule runs independently; all violations are returned together and
/// nothing is committed anywhere. Strings are trimmed and `servicesOffered`
/// is de-duplicated keeping the first occurrence.
pub fn validate(raw: &Map<String, Value>) -> std::result::Result<LabDraft, ValidationErrors> {
    let mut errors = Vec::new();

    let lab_name = text_field(raw, "labName", "Lab name", &mut errors);
    let contact_person = text_field(raw, "contactPerson", "Contact person", &mut errors);
    let contact_number = contact_number_field(raw, &mut errors);
    let location = text_field(raw, "location", "Location", &mut errors);
    let services_offered = services_field(raw, &mut errors);
    let test_methods = test_methods_field(raw, &mut errors);
    let status = status_field(raw, &mut errors);

    match (
        lab_name,
        contact_person,
        contact_number,
        location,
        services_offered,
        test_methods,
        status,
    ) {
        (
            Some(lab_name),
            Some(contact_person),
            Some(contact_number),
            Some(location),
            Some(services_offered),
            Some(test_methods),
            Some(status),
        ) if errors.is_empty() => Ok(LabDraft {
            lab_name,
            contact_person,
            contact_number,
            location,
            services_offered,
            test_methods,
            status,
        }),
        _ => Err(ValidationErrors::new(errors)),
    }
}

/// Checks an already-typed record against the same rules as [`validate`],
/// and additionally requires it to be in normalized form.
pub fn validate_record(record: &LabRecord) -> std::result::Result<(), ValidationErrors> {
    let raw = match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            return Err(ValidationErrors::new(vec![FieldError::new(
                "record",
                "Record did not serialize to an object",
            )]))
        }
        Err(e) => {
            return Err(ValidationErrors::new(vec![FieldError::new(
                "record",
                e.to_string(),
            )]))
        }
    };

    let draft = validate(&raw)?;
    if draft.services_offered.len() != record.services_offered.len() {
        return Err(ValidationErrors::new(vec![FieldError::new(
            "servicesOffered",
            "Services offered must not contain duplicates",
        )]));
    }
    if draft != LabDraft::from(record.clone()) {
        return Err(ValidationErrors::new(vec![FieldError::new(
            "record",
            "Record fields must not carry surrounding whitespace",
        )]));
    }
    Ok(())
}

fn string_value(
    raw: &Map<String, Value>,
    field: &str,
    label: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match raw.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, format!("{} is required", label)));
            None
        }
        Some(Value::String(s)) => Some(s.trim().to_string()),
        Some(_) => {
            errors.push(FieldError::new(field, format!("{} must be a string", label)));
            None
        }
    }
}

fn min_length(field: &str, label: &str, value: &str, errors: &mut Vec<FieldError>) -> bool {
    if value.chars().count() < MIN_TEXT_LENGTH {
        errors.push(FieldError::new(
            field,
            format!("{} must be at least {} characters", label, MIN_TEXT_LENGTH),
        ));
        return false;
    }
    true
}

fn text_field(
    raw: &Map<String, Value>,
    field: &str,
    label: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let value = string_value(raw, field, label, errors)?;
    min_length(field, label, &value, errors).then_some(value)
}

fn contact_number_field(raw: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<String> {
    let value = string_value(raw, "contactNumber", "Contact number", errors)?;
    // 完整比對，前綴符合不算
    if !CONTACT_NUMBER_PATTERN.is_match(&value) {
        errors.push(FieldError::new(
            "contactNumber",
            "Contact number must be exactly 10 digits",
        ));
        return None;
    }
    Some(value)
}

fn array_value<'a>(
    raw: &'a Map<String, Value>,
    field: &str,
    label: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a Vec<Value>> {
    match raw.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, format!("{} is required", label)));
            None
        }
        Some(Value::Array(items)) => Some(items),
        Some(_) => {
            errors.push(FieldError::new(field, format!("{} must be a list", label)));
            None
        }
    }
}

/// 非空白字串清單；每個元素各自回報錯誤
fn string_list(field: &str, items: &[Value], errors: &mut Vec<FieldError>) -> Option<Vec<String>> {
    let mut values = Vec::with_capacity(items.len());
    let mut ok = true;
    for (i, item) in items.iter().enumerate() {
        match item {
            Value::String(s) if !s.trim().is_empty() => values.push(s.trim().to_string()),
            Value::String(_) => {
                errors.push(FieldError::new(
                    format!("{}[{}]", field, i),
                    "Entry cannot be empty or whitespace-only",
                ));
                ok = false;
            }
            _ => {
                errors.push(FieldError::new(
                    format!("{}[{}]", field, i),
                    "Entry must be a string",
                ));
                ok = false;
            }
        }
    }
    ok.then_some(values)
}

fn services_field(raw: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<Vec<String>> {
    let items = array_value(raw, "servicesOffered", "Services offered", errors)?;
    if items.is_empty() {
        errors.push(FieldError::new(
            "servicesOffered",
            "At least one service must be offered",
        ));
        return None;
    }

    let services = string_list("servicesOffered", items, errors)?;
    let mut seen = HashSet::new();
    Some(
        services
            .into_iter()
            .filter(|service| seen.insert(service.clone()))
            .collect(),
    )
}

fn test_methods_field(
    raw: &Map<String, Value>,
    errors: &mut Vec<FieldError>,
) -> Option<Vec<TestMethod>> {
    let items = array_value(raw, "testMethods", "Test methods", errors)?;
    if items.is_empty() {
        errors.push(FieldError::new(
            "testMethods",
            "At least one test method is required",
        ));
        return None;
    }

    let mut methods = Vec::with_capacity(items.len());
    let mut ok = true;
    for (i, item) in items.iter().enumerate() {
        match test_method(i, item, errors) {
            Some(method) => methods.push(method),
            None => ok = false,
        }
    }
    ok.then_some(methods)
}

fn test_method(index: usize, item: &Value, errors: &mut Vec<FieldError>) -> Option<TestMethod> {
    let prefix = format!("testMethods[{}]", index);
    let Value::Object(obj) = item else {
        errors.push(FieldError::new(prefix, "Test method must be an object"));
        return None;
    };

    let mut element_errors = Vec::new();
    let method = text_field(obj, "method", "Method", &mut element_errors);
    let sample_type = text_field(obj, "sampleType", "Sample type", &mut element_errors);
    let parameters = array_value(obj, "parameters", "Parameters", &mut element_errors)
        .and_then(|items| {
            if items.is_empty() {
                element_errors.push(FieldError::new(
                    "parameters",
                    "At least one parameter is required",
                ));
                return None;
            }
            string_list("parameters", items, &mut element_errors)
        });

    // 巢狀欄位加上前綴，例如 testMethods[0].method
    errors.extend(element_errors.into_iter().map(|error| FieldError {
        field: format!("{}.{}", prefix, error.field),
        message: error.message,
    }));

    Some(TestMethod {
        method: method?,
        parameters: parameters?,
        sample_type: sample_type?,
    })
}

fn status_field(raw: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<LabStatus> {
    match raw.get("status") {
        None | Some(Value::Null) => Some(LabStatus::default()),
        Some(Value::String(s)) => match LabStatus::parse(s.trim()) {
            Some(status) => Some(status),
            None => {
                errors.push(FieldError::new(
                    "status",
                    "Status must be either \"Active\" or \"Inactive\"",
                ));
                None
            }
        },
        Some(_) => {
            errors.push(FieldError::new("status", "Status must be a string"));
            None
        }
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LabError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LabError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(LabError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
