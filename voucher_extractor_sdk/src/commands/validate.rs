use super::CommandOutcome;
use crate::cli::ValidateArgs;
use crate::error::Result;
use crate::input::load_document;
use serde_json::{json, Map};
use voucher_extractor_base::validate_table_configuration;
use voucher_formula::{log_error, log_info};

/// Validate a configuration file; the outcome fails when any error-severity
/// issue is found
pub fn execute_validate(args: &ValidateArgs) -> Result<CommandOutcome> {
    let config = load_document(&args.config)?;
    let report = validate_table_configuration(&config);

    if let Some(first) = report.errors().next() {
        log_error!(
            first.kind.code(),
            "Table configuration has errors",
            "errors" => report.error_count(),
            "config" => args.config.display()
        );
    } else {
        log_info!("Table configuration is usable",
            "warnings" => report.warning_count(),
            "config" => args.config.display()
        );
    }

    let mut payload = Map::new();
    payload.insert("config".to_string(), json!(args.config.display().to_string()));
    payload.insert("summary".to_string(), json!(report.summary()));
    payload.insert("validation".to_string(), report.to_json());

    Ok(CommandOutcome::new("validate", payload, report.is_valid()))
}
