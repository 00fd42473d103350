use super::CommandOutcome;
use crate::cli::ExtractArgs;
use crate::error::Result;
use crate::input::{load_document, load_selection};
use serde_json::{json, Map};
use voucher_extractor_base::types::TableConfiguration;
use voucher_extractor_base::{ExtractorOptions, FieldExtractor};
use voucher_formula::logging::codes;
use voucher_formula::{log_info, log_success};

pub fn execute_extract(args: &ExtractArgs) -> Result<CommandOutcome> {
    log_info!("Extracting record", "record" => args.record.display());

    let record = load_document(&args.record)?;
    let config = TableConfiguration::from_value(&load_document(&args.config)?);
    let selection = load_selection(args.selection.as_deref())?;

    let result = FieldExtractor::with_options(&ExtractorOptions::default()).extract(
        &record,
        &config,
        selection.as_ref(),
    );

    log_success!(
        codes::success::EXTRACTION_COMPLETE,
        "Record extracted",
        "fields" => result.len(),
        "tables" => config.len()
    );

    let mut payload = Map::new();
    payload.insert("record".to_string(), json!(args.record.display().to_string()));
    payload.insert("result".to_string(), result.to_json());

    Ok(CommandOutcome::new("extract", payload, true))
}
