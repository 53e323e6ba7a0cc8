//! Log store effect interface

use crate::errors::Result;
use crate::status::LogCounters;
use async_trait::async_trait;

/// Severity counters maintained by the log store
#[async_trait]
pub trait LogEffects: Send + Sync {
    /// Current warning/error/panic counts
    async fn log_counters(&self) -> Result<LogCounters>;
}
