use crate::domain::model::LabRecord;
use serde::Serialize;

/// 表格顯示用的扁平列，欄位順序與格線欄位一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Lab Name")]
    pub lab_name: String,
    #[serde(rename = "Contact Person")]
    pub contact_person: String,
    #[serde(rename = "Contact Number")]
    pub contact_number: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Services Offered")]
    pub services_offered: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Test Methods")]
    pub test_methods: String,
}

impl LabRow {
    pub const HEADERS: [&'static str; 8] = [
        "ID",
        "Lab Name",
        "Contact Person",
        "Contact Number",
        "Location",
        "Services Offered",
        "Status",
        "Test Methods",
    ];

    pub fn cells(&self) -> [&str; 8] {
        [
            &self.id,
            &self.lab_name,
            &self.contact_person,
            &self.contact_number,
            &self.location,
            &self.services_offered,
            &self.status,
            &self.test_methods,
        ]
    }
}

impl From<&LabRecord> for LabRow {
    fn from(lab: &LabRecord) -> Self {
        LabRow {
            id: lab.id.to_string(),
            lab_name: lab.lab_name.clone(),
            contact_person: lab.contact_person.clone(),
            contact_number: lab.contact_number.clone(),
            location: lab.location.clone(),
            services_offered: lab.services_offered.join(", "),
            status: lab.status.to_string(),
            test_methods: lab
                .test_methods
                .iter()
                .map(|tm| format!("{} ({})", tm.method, tm.sample_type))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// 以固定寬度欄位輸出純文字表格
pub fn render_table(labs: &[LabRecord]) -> String {
    let rows: Vec<LabRow> = labs.iter().map(LabRow::from).collect();

    let mut widths: Vec<usize> = LabRow::HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: [&str; 8]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = format_line(LabRow::HEADERS);
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in &rows {
        out.push_str(&format_line(row.cells()));
        out.push('\n');
    }
    out
}
