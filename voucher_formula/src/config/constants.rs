//! Fixed limits shared by the extractor crates

/// Upper bound on worker threads used by batch extraction
pub const MAX_BATCH_THREADS: usize = 64;

/// Default cap on worker threads when none is configured
pub const DEFAULT_BATCH_THREADS_CAP: usize = 8;

/// Maximum events retained by the in-memory logger
pub const LOG_EVENT_BUFFER_SIZE: usize = 10_000;
