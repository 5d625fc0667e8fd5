pub mod report_file;

pub use report_file::{write_report_file, ReportFile};
