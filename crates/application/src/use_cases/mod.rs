mod generate_report;

pub use generate_report::{GenerateReportUseCase, ReportSummary};
