use clap::Parser;
use lab_registry::config::seed::{load_form_file, load_seed_file};
use lab_registry::utils::error::ErrorSeverity;
use lab_registry::utils::{logger, output};
use lab_registry::{
    CliConfig, Command, InMemoryLabStore, LabId, LabRegistry, LabStore, Result, Settings,
};

fn main() {
    let config = CliConfig::parse();

    // 設定檔可能開啟 verbose，所以先解析設定再初始化日誌
    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(exit_code(e.severity()));
        }
    };

    if settings.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::info!("Starting lab-registry");
    tracing::debug!("Resolved settings: {:?}", settings);

    match run(&config.command, &settings) {
        Ok(rendered) => println!("{}", rendered.trim_end()),
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            std::process::exit(exit_code(e.severity()));
        }
    }
}

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2, // 輸入被拒絕，可修正後重送
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn run(command: &Command, settings: &Settings) -> Result<String> {
    let store = match &settings.seed_path {
        Some(path) => InMemoryLabStore::from_seed(load_seed_file(path)?)?,
        None => InMemoryLabStore::new(),
    };
    let mut registry = LabRegistry::new(store);

    match command {
        Command::List => {}
        Command::Add { input } => {
            let raw = load_form_file(input)?;
            let lab = registry.submit_new(&raw)?;
            tracing::info!("✅ Lab '{}' registered with id {}", lab.lab_name, lab.id);
        }
        Command::Update { id, input } => {
            let raw = load_form_file(input)?;
            let lab = registry.submit_edit(LabId(*id), &raw)?;
            tracing::info!("✅ Lab {} updated", lab.id);
        }
        Command::NextId => return Ok(registry.store().next_id()?.to_string()),
    }

    output::render(registry.labs(), settings.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_registry::config::toml_config::TomlConfig;
    use lab_registry::LabError;

    #[test]
    fn test_settings_failures_use_severity_exit_code() {
        let missing = TomlConfig::from_file("/nonexistent/lab-registry.toml").unwrap_err();
        assert!(matches!(missing, LabError::IoError(_)));
        assert_eq!(exit_code(missing.severity()), 3);

        let broken = TomlConfig::from_toml_str("[seed\npath = 1").unwrap_err();
        assert_eq!(exit_code(broken.severity()), 3);
    }

    #[test]
    fn test_exit_codes_by_severity() {
        assert_eq!(exit_code(ErrorSeverity::Low), 2);
        assert_eq!(exit_code(ErrorSeverity::High), 1);
        assert_eq!(exit_code(ErrorSeverity::Critical), 3);
    }
}
