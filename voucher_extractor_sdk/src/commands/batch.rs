use super::CommandOutcome;
use crate::cli::BatchArgs;
use crate::error::{CliError, Result};
use crate::input::{load_document, load_records, load_selection};
use chrono::SecondsFormat;
use serde_json::{json, Map};
use voucher_extractor_base::types::TableConfiguration;
use voucher_extractor_base::{extract_batch, ExtractorOptions};
use voucher_formula::log_info;

/// Options file first, then command-line overrides
fn resolve_options(args: &BatchArgs) -> Result<ExtractorOptions> {
    let mut options = match &args.options {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
            ExtractorOptions::from_toml(&text)?
        }
        None => ExtractorOptions::default(),
    };

    if let Some(threads) = args.threads {
        options = options.with_max_threads(threads);
    }
    if args.sequential {
        options = options.with_sequential(true);
    }

    options.validate()?;
    Ok(options)
}

pub fn execute_batch(args: &BatchArgs) -> Result<CommandOutcome> {
    let options = resolve_options(args)?;
    let records = load_records(&args.records)?;
    let config = TableConfiguration::from_value(&load_document(&args.config)?);
    let selection = load_selection(args.selection.as_deref())?;

    log_info!("Loaded batch input",
        "records" => records.len(),
        "path" => args.records.display()
    );

    let batch = extract_batch(&records, &config, selection.as_ref(), &options);

    let mut payload = Map::new();
    payload.insert("records".to_string(), json!(batch.record_count()));
    payload.insert("non_empty".to_string(), json!(batch.non_empty_count()));
    payload.insert("threads_used".to_string(), json!(batch.threads_used));
    payload.insert(
        "started_at".to_string(),
        json!(batch.started_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    payload.insert(
        "duration_ms".to_string(),
        json!(batch.processing_duration.as_secs_f64() * 1000.0),
    );
    payload.insert("results".to_string(), batch.into_json());

    Ok(CommandOutcome::new("batch", payload, true))
}
