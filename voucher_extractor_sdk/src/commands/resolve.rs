use super::CommandOutcome;
use crate::cli::ResolveArgs;
use crate::error::Result;
use crate::input::load_document;
use serde_json::{json, Map, Value};
use voucher_extractor_base::{ExtractorOptions, FieldExtractor};
use voucher_formula::{log_debug, FormulaPath};

/// Evaluate one formula. An unresolved formula is reported with a null
/// value, not as a failure.
pub fn execute_resolve(args: &ResolveArgs) -> Result<CommandOutcome> {
    let record = load_document(&args.record)?;
    let formula = Value::String(args.formula.clone());

    if let Err(reason) = FormulaPath::parse_str(&args.formula) {
        log_debug!("Formula does not parse", "reason" => reason);
    }

    let resolved = FieldExtractor::with_options(&ExtractorOptions::default()).resolve_formula(
        &record,
        &formula,
        args.table.as_deref(),
    );

    let mut payload = Map::new();
    payload.insert("formula".to_string(), formula);
    payload.insert("table".to_string(), json!(args.table));
    payload.insert("resolved".to_string(), json!(resolved.is_some()));
    payload.insert("value".to_string(), resolved.unwrap_or(Value::Null));

    Ok(CommandOutcome::new("resolve", payload, true))
}
