//! JSON report envelope written by every command

use crate::error::Result;
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Map, Value};
use std::io::Write;
use std::path::Path;

/// Wrap a command's payload with its name and generation time
pub fn build_report(command: &str, payload: Map<String, Value>) -> Value {
    let mut report = Map::new();
    report.insert(
        "generated_at".to_string(),
        json!(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    report.insert("command".to_string(), json!(command));
    report.extend(payload);
    Value::Object(report)
}

pub fn render(report: &Value, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(text)
}

/// Print to stdout, or write to `output` when given
pub fn write_report(report: &Value, output: Option<&Path>, pretty: bool) -> Result<()> {
    let text = render(report, pretty)?;
    match output {
        Some(path) => std::fs::write(path, text + "\n")?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", text)?;
        }
    }
    Ok(())
}
