use crate::ports::{CacheSnapshotSource, PayloadResolver};
use crate::report::{self, ReportMode, NO_DATA};
use dnscache_view_domain::DomainError;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info};

/// Row accounting for one completed report pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub entries: usize,
    pub resolved: usize,
    pub placeholders: usize,
}

pub struct GenerateReportUseCase {
    cache: Arc<dyn CacheSnapshotSource>,
    resolver: Arc<dyn PayloadResolver>,
}

impl GenerateReportUseCase {
    pub fn new(cache: Arc<dyn CacheSnapshotSource>, resolver: Arc<dyn PayloadResolver>) -> Self {
        Self { cache, resolver }
    }

    /// One full snapshot-to-report pass: header first, then one row per
    /// cache entry in snapshot order.
    ///
    /// A failed per-entry resolve degrades that row to the placeholder
    /// payload and the pass continues; snapshot and sink failures abort.
    pub fn execute(
        &self,
        mode: ReportMode,
        out: &mut dyn Write,
    ) -> Result<ReportSummary, DomainError> {
        let entries = self.cache.fetch_snapshot()?;
        debug!(entries = entries.len(), "cache snapshot fetched");

        writeln!(out, "{}", report::header(mode)).map_err(io_err)?;

        let mut summary = ReportSummary {
            entries: entries.len(),
            resolved: 0,
            placeholders: 0,
        };
        for entry in &entries {
            let payload = if entry.has_payload() {
                match self.resolver.resolve(&entry.name, entry.record_type) {
                    Ok(data) => {
                        summary.resolved += 1;
                        data.to_string()
                    }
                    Err(e) => {
                        debug!(
                            name = %entry.name,
                            record_type = entry.record_type,
                            error = %e,
                            "payload resolve failed"
                        );
                        summary.placeholders += 1;
                        NO_DATA.to_string()
                    }
                }
            } else {
                summary.placeholders += 1;
                NO_DATA.to_string()
            };

            writeln!(out, "{}", report::format_row(entry, &payload, mode)).map_err(io_err)?;
        }

        out.flush().map_err(io_err)?;
        info!(
            entries = summary.entries,
            resolved = summary.resolved,
            placeholders = summary.placeholders,
            "report complete"
        );
        Ok(summary)
    }
}

fn io_err(e: std::io::Error) -> DomainError {
    DomainError::Io(e.to_string())
}
