// Core modules
pub mod core;
pub mod storage;
pub mod common;

// Re-export commonly used types
pub use common::{Config, GenError, Result};
pub use core::{write_report, ConditionCoverage, CountingWriter, ReportSummary};
pub use storage::{write_report_file, ReportFile};

pub mod naming {
    pub use crate::core::naming::*;
}
