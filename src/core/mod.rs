pub mod counter;
pub mod coverage;
pub mod emitter;
pub mod naming;

pub use counter::CountingWriter;
pub use coverage::ConditionCoverage;
pub use emitter::{write_report, ReportSummary};
