//! dnscache-view Application Layer: ports, report encodings, use cases.
pub mod ports;
pub mod report;
pub mod use_cases;

pub use report::ReportMode;
pub use use_cases::{GenerateReportUseCase, ReportSummary};
