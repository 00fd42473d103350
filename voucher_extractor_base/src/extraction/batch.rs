//! Batch extraction
//!
//! Runs the same configuration over many records, either on the calling
//! thread or across a bounded set of scoped worker threads. Results are
//! always returned in input order.

use super::extractor::FieldExtractor;
use super::options::ExtractorOptions;
use crate::types::{ExtractionResult, FieldSelection, TableConfiguration};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::thread;
use std::time::{Duration, Instant};
use voucher_formula::logging::{self, codes, RecordContext};
use voucher_formula::{log_info, log_success};

/// Results of a batch run
#[derive(Debug, Clone)]
pub struct BatchExtraction {
    /// One result per input record, in input order
    pub results: Vec<ExtractionResult>,
    pub started_at: DateTime<Utc>,
    pub processing_duration: Duration,
    pub threads_used: usize,
}

impl BatchExtraction {
    pub fn record_count(&self) -> usize {
        self.results.len()
    }

    /// Records whose result has at least one field
    pub fn non_empty_count(&self) -> usize {
        self.results.iter().filter(|r| !r.is_empty()).count()
    }

    pub fn records_per_second(&self) -> f64 {
        let secs = self.processing_duration.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.results.len() as f64 / secs
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Batch extraction completed: {} records, {} with fields, {} thread(s), {:.2}ms total",
            self.record_count(),
            self.non_empty_count(),
            self.threads_used,
            self.processing_duration.as_secs_f64() * 1000.0
        )
    }

    pub fn into_json(self) -> Value {
        Value::Array(self.results.iter().map(ExtractionResult::to_json).collect())
    }
}

fn extract_one(
    extractor: &FieldExtractor,
    index: usize,
    record: &Value,
    config: &TableConfiguration,
    selection: Option<&FieldSelection>,
) -> ExtractionResult {
    logging::with_record_context(RecordContext::new(index), || {
        extractor.extract(record, config, selection)
    })
}

/// Extract every record in `records`.
///
/// Options are assumed valid; a thread count of zero is treated as one.
pub fn extract_batch(
    records: &[Value],
    config: &TableConfiguration,
    selection: Option<&FieldSelection>,
    options: &ExtractorOptions,
) -> BatchExtraction {
    let started_at = Utc::now();
    let start = Instant::now();
    let extractor = FieldExtractor::with_options(options);

    let threads = if options.sequential || records.len() <= 1 {
        1
    } else {
        // Even chunks may need fewer workers than requested
        let requested = options.max_threads.max(1).min(records.len());
        records.len().div_ceil(records.len().div_ceil(requested))
    };

    log_info!("Starting batch extraction",
        "records" => records.len(),
        "threads" => threads
    );

    let results = if threads == 1 {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| extract_one(&extractor, index, record, config, selection))
            .collect()
    } else {
        extract_parallel(&extractor, records, config, selection, threads)
    };

    let batch = BatchExtraction {
        results,
        started_at,
        processing_duration: start.elapsed(),
        threads_used: threads,
    };

    log_success!(
        codes::success::BATCH_EXTRACTION_COMPLETE,
        "Batch extraction completed",
        "records" => batch.record_count(),
        "threads" => batch.threads_used,
        "duration_ms" => format!("{:.2}", batch.processing_duration.as_secs_f64() * 1000.0)
    );

    batch
}

fn extract_parallel(
    extractor: &FieldExtractor,
    records: &[Value],
    config: &TableConfiguration,
    selection: Option<&FieldSelection>,
    threads: usize,
) -> Vec<ExtractionResult> {
    let chunk_size = records.len().div_ceil(threads);

    thread::scope(|scope| {
        let handles: Vec<_> = records
            .chunks(chunk_size)
            .enumerate()
            .map(|(chunk_index, chunk)| {
                let offset = chunk_index * chunk_size;
                scope.spawn(move || {
                    chunk
                        .iter()
                        .enumerate()
                        .map(|(i, record)| {
                            extract_one(extractor, offset + i, record, config, selection)
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        // Chunks are joined in spawn order, which keeps input order
        handles
            .into_iter()
            .enumerate()
            .flat_map(|(chunk_index, handle)| match handle.join() {
                Ok(results) => results,
                Err(_) => {
                    logging::safe_log_error(
                        codes::system::INTERNAL_ERROR,
                        "Batch worker panicked; its records are re-extracted sequentially",
                    );
                    let start = chunk_index * chunk_size;
                    let end = (start + chunk_size).min(records.len());
                    records[start..end]
                        .iter()
                        .enumerate()
                        .map(|(i, record)| {
                            extract_one(extractor, start + i, record, config, selection)
                        })
                        .collect()
                }
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_records(count: usize) -> Vec<Value> {
        (0..count)
            .map(|i| {
                json!({
                    "NAME": format!("V{}", i),
                    "allledgerentries": [{"LEDGERNAME": "Cash", "AMOUNT": i}]
                })
            })
            .collect()
    }

    fn sample_config() -> TableConfiguration {
        TableConfiguration::from_value(&json!({
            "ledgerentries": [{
                "Name": "$NAME",
                "Entries": [{"Ledger": "$LEDGERNAME", "Amount": "$AMOUNT"}]
            }]
        }))
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let records = sample_records(37);
        let config = sample_config();

        let sequential = extract_batch(
            &records,
            &config,
            None,
            &ExtractorOptions::default().with_sequential(true),
        );
        let parallel = extract_batch(
            &records,
            &config,
            None,
            &ExtractorOptions::default()
                .with_sequential(false)
                .with_max_threads(4),
        );

        assert_eq!(sequential.threads_used, 1);
        assert_eq!(parallel.threads_used, 4);
        assert_eq!(sequential.results, parallel.results);
    }

    #[test]
    fn test_results_in_input_order() {
        let records = sample_records(10);
        let batch = extract_batch(
            &records,
            &sample_config(),
            None,
            &ExtractorOptions::default().with_max_threads(3),
        );

        for (i, result) in batch.results.iter().enumerate() {
            let name = result.get("Name").and_then(|v| v.as_value());
            assert_eq!(name, Some(&json!(format!("V{}", i))));
        }
    }

    #[test]
    fn test_thread_count_bounded_by_records() {
        let records = sample_records(2);
        let batch = extract_batch(
            &records,
            &sample_config(),
            None,
            &ExtractorOptions::default().with_max_threads(16),
        );
        assert_eq!(batch.threads_used, 2);
    }

    #[test]
    fn test_empty_batch() {
        let batch = extract_batch(&[], &sample_config(), None, &ExtractorOptions::default());
        assert_eq!(batch.record_count(), 0);
        assert_eq!(batch.into_json(), json!([]));
    }

    #[test]
    fn test_summary_mentions_counts() {
        let records = sample_records(3);
        let batch = extract_batch(
            &records,
            &sample_config(),
            None,
            &ExtractorOptions::default().with_sequential(true),
        );
        assert!(batch.summary().contains("3 records"));
        assert_eq!(batch.non_empty_count(), 3);
    }
}
