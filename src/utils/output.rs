use crate::domain::model::LabRecord;
use crate::domain::view::{render_table, LabRow};
use crate::utils::error::{LabError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(LabError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: table, json, csv".to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        })
    }
}

pub fn render(labs: &[LabRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(labs)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(labs)?),
        OutputFormat::Csv => render_csv(labs),
    }
}

/// Grid columns as CSV; list columns are joined, so quoting is left to the writer.
pub fn render_csv(labs: &[LabRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if labs.is_empty() {
        writer.write_record(LabRow::HEADERS)?;
    }
    for lab in labs {
        writer.serialize(LabRow::from(lab))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| LabError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| LabError::ConfigError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{LabId, LabStatus, TestMethod};

    fn lab() -> LabRecord {
        LabRecord {
            id: LabId(2),
            lab_name: "Harbour Water Lab".to_string(),
            contact_person: "Ms. Anjali".to_string(),
            contact_number: "9123456780".to_string(),
            location: "Kochi".to_string(),
            services_offered: vec!["Water Quality".to_string(), "Microbiology".to_string()],
            test_methods: vec![TestMethod {
                method: "APHA 2130".to_string(),
                parameters: vec!["Turbidity".to_string()],
                sample_type: "Water".to_string(),
            }],
            status: LabStatus::Active,
        }
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_csv_quotes_joined_columns() {
        let csv_output = render_csv(&[lab()]).unwrap();
        let lines: Vec<&str> = csv_output.lines().collect();
        assert_eq!(
            lines[0],
            "ID,Lab Name,Contact Person,Contact Number,Location,Services Offered,Status,Test Methods"
        );
        assert_eq!(
            lines[1],
            "2,Harbour Water Lab,Ms. Anjali,9123456780,Kochi,\"Water Quality, Microbiology\",Active,APHA 2130 (Water)"
        );
    }

    #[test]
    fn test_render_csv_empty_has_header() {
        let csv_output = render_csv(&[]).unwrap();
        assert_eq!(csv_output.lines().count(), 1);
    }

    #[test]
    fn test_render_json_uses_record_shape() {
        let json = render(&[lab()], OutputFormat::Json).unwrap();
        let parsed: Vec<LabRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![lab()]);
    }
}
