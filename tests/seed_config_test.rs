use anyhow::Result;
use lab_registry::config::seed::{load_form_file, load_seed_file};
use lab_registry::config::toml_config::TomlConfig;
use lab_registry::utils::output::{render, OutputFormat};
use lab_registry::{InMemoryLabStore, LabError, LabId, LabRegistry, LabStore, Settings};
use tempfile::TempDir;

const SEED: &str = r#"[
  {
    "id": 1,
    "labName": "Viswa Lab Chennai",
    "location": "Chennai",
    "contactPerson": "Dr. Ramesh",
    "contactNumber": "9876543210",
    "servicesOffered": ["Chemical Analysis", "Oil Testing", "Water Quality"],
    "status": "Active",
    "testMethods": [
      {"method": "ASTM D445", "parameters": ["Viscosity", "Temperature"], "sampleType": "Oil"}
    ]
  },
  {
    "id": 3,
    "labName": "Harbour Water Lab",
    "location": "Kochi",
    "contactPerson": "Ms. Anjali",
    "contactNumber": "9123456780",
    "servicesOffered": ["Water Quality"],
    "status": "Inactive",
    "testMethods": [
      {"method": "APHA 2130", "parameters": ["Turbidity"], "sampleType": "Water"}
    ]
  }
]"#;

/// 模擬 CLI 流程：設定檔 -> 種子資料 -> 新增 -> 輸出
#[test]
fn test_config_seed_add_and_render() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let seed_path = temp_dir.path().join("labs.json");
    std::fs::write(&seed_path, SEED)?;

    let config_path = temp_dir.path().join("lab-registry.toml");
    let normalized = seed_path.to_str().unwrap().replace('\\', "/");
    std::fs::write(
        &config_path,
        format!("[seed]\npath = \"{}\"\n\n[display]\nformat = \"csv\"\n", normalized),
    )?;

    let file = TomlConfig::from_file(&config_path)?;
    let settings = Settings::resolve(file, None, None, false, false)?;
    assert_eq!(settings.format, OutputFormat::Csv);

    let seed = load_seed_file(settings.seed_path.as_deref().unwrap())?;
    let mut registry = LabRegistry::new(InMemoryLabStore::from_seed(seed)?);

    let form_path = temp_dir.path().join("new_lab.json");
    std::fs::write(
        &form_path,
        r#"{
            "labName": "Delta Oil Lab",
            "contactPerson": "Mr. Suresh",
            "contactNumber": "9000000001",
            "location": "Mumbai",
            "servicesOffered": ["Oil Testing", "Oil Testing"],
            "testMethods": [{"method": "ASTM D93", "parameters": ["Flash Point"], "sampleType": "Oil"}]
        }"#,
    )?;
    let added = registry.submit_new(&load_form_file(&form_path)?)?;
    assert_eq!(added.id, LabId(4));
    assert_eq!(added.services_offered, vec!["Oil Testing"]);

    let csv_output = render(registry.labs(), settings.format)?;
    let lines: Vec<&str> = csv_output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("1,Viswa Lab Chennai,"));
    assert!(lines[2].starts_with("3,Harbour Water Lab,"));
    assert!(lines[3].starts_with("4,Delta Oil Lab,"));
    Ok(())
}

#[test]
fn test_seed_with_duplicate_ids_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let seed_path = temp_dir.path().join("labs.json");
    std::fs::write(&seed_path, SEED.replace("\"id\": 3", "\"id\": 1"))?;

    let seed = load_seed_file(&seed_path)?;
    match InMemoryLabStore::from_seed(seed) {
        Err(LabError::DuplicateId { id }) => assert_eq!(id, LabId(1)),
        other => panic!("expected DuplicateId, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_missing_seed_file() {
    let result = load_seed_file("/nonexistent/labs.json");
    assert!(matches!(result, Err(LabError::IoError(_))));
}

#[test]
fn test_table_render_of_seeded_store() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let seed_path = temp_dir.path().join("labs.json");
    std::fs::write(&seed_path, SEED)?;

    let store = InMemoryLabStore::from_seed(load_seed_file(&seed_path)?)?;
    let table = render(store.list(), OutputFormat::Table)?;

    assert!(table.contains("Chemical Analysis, Oil Testing, Water Quality"));
    assert!(table.contains("APHA 2130 (Water)"));
    assert_eq!(table.lines().count(), 4);
    Ok(())
}
