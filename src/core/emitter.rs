//! Streaming Cobertura XML writer.
//!
//! The document is written element by element straight into the sink; nothing
//! is buffered beyond what the sink itself buffers. Size is only checked between
//! packages and between classes, so every element that was opened is closed and
//! the output stays well-formed whatever the target.

use std::io::Write;

use rand::Rng;
use tracing::{debug, info};

use crate::common::Result;
use crate::core::counter::CountingWriter;
use crate::core::coverage::{self, ConditionCoverage};
use crate::core::naming;

/// Packages between progress messages.
pub const PROGRESS_INTERVAL: usize = 50;

pub const SOURCE_PATH: &str = "/home/user/project";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

const XML_DECLARATION: &str = r#"<?xml version="1.0" ?>"#;

// Aggregate attributes are placeholders and never recomputed from the body.
const COVERAGE_OPEN: &str = concat!(
    r#"<coverage version="6.5.0" timestamp="1700000000000" "#,
    r#"lines-valid="999999" lines-covered="750000" line-rate="0.75" "#,
    r#"branches-covered="5000" branches-valid="10000" branch-rate="0.5" "#,
    r#"complexity="0">"#,
);

/// What a finished run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub bytes: u64,
    pub packages: usize,
    pub classes: usize,
    pub methods: usize,
}

impl ReportSummary {
    pub fn megabytes(&self) -> f64 {
        self.bytes as f64 / BYTES_PER_MB
    }
}

/// Write a complete report to `out`, stopping once `target_bytes` is reached.
///
/// At least one package is always written. The result may overshoot the
/// target by the size of one class plus the closing tags.
pub fn write_report<W, R>(out: W, target_bytes: u64, rng: &mut R) -> Result<ReportSummary>
where
    W: Write,
    R: Rng + ?Sized,
{
    let mut emitter = Emitter {
        out: CountingWriter::new(out),
        rng,
        target_bytes,
        summary: ReportSummary::default(),
    };
    emitter.run()?;
    Ok(emitter.finish())
}

struct Emitter<'r, W, R: ?Sized> {
    out: CountingWriter<W>,
    rng: &'r mut R,
    target_bytes: u64,
    summary: ReportSummary,
}

impl<W: Write, R: Rng + ?Sized> Emitter<'_, W, R> {
    fn target_reached(&self) -> bool {
        self.out.written() >= self.target_bytes
    }

    fn run(&mut self) -> Result<()> {
        debug!("Writing report, target {} bytes", self.target_bytes);
        self.write_header()?;

        let mut pkg_idx = 0;
        loop {
            self.write_package(pkg_idx)?;
            pkg_idx += 1;

            if pkg_idx % PROGRESS_INTERVAL == 0 {
                info!(
                    "  ... {} packages, {:.1} MB",
                    pkg_idx,
                    self.out.written() as f64 / BYTES_PER_MB
                );
            }

            if self.target_reached() {
                break;
            }
        }

        self.write_footer()?;
        self.out.flush()?;
        Ok(())
    }

    fn finish(self) -> ReportSummary {
        ReportSummary {
            bytes: self.out.written(),
            ..self.summary
        }
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(self.out, "{}", XML_DECLARATION)?;
        writeln!(self.out, "{}", COVERAGE_OPEN)?;
        writeln!(self.out, "    <sources>")?;
        writeln!(self.out, "        <source>{}</source>", SOURCE_PATH)?;
        writeln!(self.out, "    </sources>")?;
        writeln!(self.out, "    <packages>")?;
        Ok(())
    }

    fn write_footer(&mut self) -> Result<()> {
        writeln!(self.out, "    </packages>")?;
        writeln!(self.out, "</coverage>")?;
        Ok(())
    }

    fn write_package(&mut self, pkg_idx: usize) -> Result<()> {
        writeln!(
            self.out,
            r#"        <package name="{}" line-rate="0.75" branch-rate="0.5" complexity="0">"#,
            naming::package_name(pkg_idx)
        )?;
        writeln!(self.out, "            <classes>")?;

        for cls_idx in 0..naming::classes_in_package(pkg_idx) {
            self.write_class(pkg_idx, cls_idx)?;

            // The package is still closed below, only the remaining classes are skipped.
            if self.target_reached() {
                break;
            }
        }

        writeln!(self.out, "            </classes>")?;
        writeln!(self.out, "        </package>")?;
        self.summary.packages += 1;
        Ok(())
    }

    fn write_class(&mut self, pkg_idx: usize, cls_idx: usize) -> Result<()> {
        let filename = naming::filename(pkg_idx, cls_idx);
        let classname = naming::classname(&filename);
        let line_rate = coverage::rate(&mut *self.rng, 0.4, 1.0);
        let branch_rate = coverage::rate(&mut *self.rng, 0.3, 1.0);

        writeln!(
            self.out,
            r#"                <class name="{}" filename="{}" complexity="0" line-rate="{}" branch-rate="{}">"#,
            classname, filename, line_rate, branch_rate
        )?;

        // Line numbers run on across methods and into the class-level block.
        let mut next_line = 1;
        writeln!(self.out, "                    <methods>")?;
        for m_idx in 0..naming::methods_in_class(pkg_idx, cls_idx) {
            next_line = self.write_method(pkg_idx, cls_idx, m_idx, next_line)?;
        }
        writeln!(self.out, "                    </methods>")?;

        let last_method_line = next_line - 1;
        let last_line = last_method_line + self.rng.gen_range(5..=20);
        writeln!(self.out, "                    <lines>")?;
        for number in 1..=last_line {
            self.write_class_line(number)?;
        }
        writeln!(self.out, "                    </lines>")?;
        writeln!(self.out, "                </class>")?;

        self.summary.classes += 1;
        Ok(())
    }

    /// Returns the next free line number.
    fn write_method(
        &mut self,
        pkg_idx: usize,
        cls_idx: usize,
        m_idx: usize,
        first_line: usize,
    ) -> Result<usize> {
        let name = naming::method_name(naming::method_index(pkg_idx, cls_idx, m_idx));
        let line_rate = coverage::rate(&mut *self.rng, 0.5, 1.0);

        writeln!(
            self.out,
            r#"                        <method name="{}" signature="()" line-rate="{}" branch-rate="0">"#,
            name, line_rate
        )?;
        writeln!(self.out, "                            <lines>")?;

        let end = first_line + naming::lines_in_method(m_idx, cls_idx);
        for number in first_line..end {
            let hits = coverage::hits(&mut *self.rng);
            writeln!(
                self.out,
                r#"                                <line number="{}" hits="{}"/>"#,
                number, hits
            )?;
        }

        writeln!(self.out, "                            </lines>")?;
        writeln!(self.out, "                        </method>")?;

        self.summary.methods += 1;
        Ok(end)
    }

    fn write_class_line(&mut self, number: usize) -> Result<()> {
        let hits = coverage::hits(&mut *self.rng);

        if coverage::branch_point(&mut *self.rng) {
            let condition = ConditionCoverage::draw(&mut *self.rng);
            writeln!(
                self.out,
                r#"                        <line number="{}" hits="{}" branch="true" condition-coverage="{}"/>"#,
                number, hits, condition
            )?;
        } else {
            writeln!(
                self.out,
                r#"                        <line number="{}" hits="{}"/>"#,
                number, hits
            )?;
        }
        Ok(())
    }
}
