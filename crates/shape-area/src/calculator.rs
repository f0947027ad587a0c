//! The shape area calculator: load a shape file, parse each line and
//! write one area report per recognised shape.

use crate::area::Area;
use crate::config::{CalculatorConfig, LabelStyle, MalformedPolicy};
use crate::error::ShapeError;
use crate::parse::{parse_line, Parsed};
use crate::shape::{ComputeArea, Shape, ShapeKind};
use crate::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Label the historical output used for rectangles.
const LEGACY_RECTANGLE_LABEL: &str = "Recatangle";

/// Read every line of a shape file.
///
/// The file is closed before this returns, on success and on error. Line
/// terminators (`\n` or `\r\n`) are stripped.
pub fn load_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ShapeError::from_io(path, e))?;
    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| ShapeError::from_io(path, e))
}

/// A computed area for one line of input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaReport {
    /// 1-based line number the shape came from.
    pub line_number: usize,
    pub shape: Shape,
    pub area: Area,
}

impl AreaReport {
    /// Compute the report for a shape.
    pub fn new(line_number: usize, shape: Shape) -> Self {
        Self {
            line_number,
            shape,
            area: shape.area(),
        }
    }

    /// Format as an output line (without terminator).
    ///
    /// There are two spaces between `is:` and the value.
    pub fn render(&self, style: LabelStyle) -> String {
        format!("Area of the {} is:  {}", label(self.shape.kind(), style), self.area)
    }
}

/// Label printed for a shape kind.
pub fn label(kind: ShapeKind, style: LabelStyle) -> &'static str {
    match (kind, style) {
        (ShapeKind::Rectangle, LabelStyle::Legacy) => LEGACY_RECTANGLE_LABEL,
        _ => kind.name(),
    }
}

/// Counts gathered over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines that produced a report.
    pub reported: usize,
    /// Lines whose kind was not recognised.
    pub skipped_unknown: usize,
    /// Malformed lines skipped under [`MalformedPolicy::Skip`].
    pub skipped_malformed: usize,
}

/// Lazy sequence of area reports over a set of lines.
///
/// Yields one item per recognised shape, in input order. Under
/// [`MalformedPolicy::Abort`] the first malformed line is yielded as an
/// error and the iterator ends.
pub struct Reports<I> {
    lines: I,
    policy: MalformedPolicy,
    line_number: usize,
    summary: RunSummary,
    done: bool,
}

impl<I> Reports<I> {
    /// Counts for the lines consumed so far.
    pub fn summary(&self) -> RunSummary {
        self.summary
    }
}

impl<I, S> Iterator for Reports<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<AreaReport>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for line in self.lines.by_ref() {
            self.line_number += 1;
            let line = line.as_ref();

            match parse_line(line) {
                Ok(Parsed::Shape(shape)) => {
                    self.summary.reported += 1;
                    return Some(Ok(AreaReport::new(self.line_number, shape)));
                }
                Ok(Parsed::Skip) => {
                    self.summary.skipped_unknown += 1;
                }
                Err(reason) => match self.policy {
                    MalformedPolicy::Abort => {
                        self.done = true;
                        return Some(Err(ShapeError::MalformedLine {
                            line_number: self.line_number,
                            line: line.to_string(),
                            reason,
                        }));
                    }
                    MalformedPolicy::Skip => {
                        warn!(
                            "Skipping malformed line {}: {} ({:?})",
                            self.line_number, reason, line
                        );
                        self.summary.skipped_malformed += 1;
                    }
                },
            }
        }

        self.done = true;
        None
    }
}

/// Computes and reports shape areas.
#[derive(Debug, Clone, Default)]
pub struct ShapeAreaCalculator {
    config: CalculatorConfig,
}

impl ShapeAreaCalculator {
    /// Create a calculator with the given configuration.
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Iterate the reports for a sequence of lines.
    pub fn reports<L>(&self, lines: L) -> Reports<L::IntoIter>
    where
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        Reports {
            lines: lines.into_iter(),
            policy: self.config.on_malformed,
            line_number: 0,
            summary: RunSummary::default(),
            done: false,
        }
    }

    /// Format a report using the configured label style.
    pub fn render(&self, report: &AreaReport) -> String {
        report.render(self.config.label_style)
    }

    /// Write one report line per recognised shape in `lines` to `sink`.
    pub fn report_lines<L, W>(&self, lines: L, sink: &mut W) -> Result<RunSummary>
    where
        L: IntoIterator,
        L::Item: AsRef<str>,
        W: Write,
    {
        let mut reports = self.reports(lines);
        for report in reports.by_ref() {
            let report = match report {
                Ok(report) => report,
                Err(e) => {
                    // Reports written so far must reach the sink before aborting.
                    sink.flush().map_err(ShapeError::Write)?;
                    return Err(e);
                }
            };
            trace!("Line {}: {:?} -> {}", report.line_number, report.shape, report.area);
            writeln!(sink, "{}", self.render(&report)).map_err(ShapeError::Write)?;
        }
        sink.flush().map_err(ShapeError::Write)?;
        Ok(reports.summary())
    }

    /// Load `path` and write its reports to `sink`.
    pub fn run<P, W>(&self, path: P, sink: &mut W) -> Result<RunSummary>
    where
        P: AsRef<Path>,
        W: Write,
    {
        let path = path.as_ref();
        let lines = load_lines(path)?;
        debug!("Loaded {} line(s) from {}", lines.len(), path.display());

        let summary = self.report_lines(&lines, sink)?;
        debug!(
            "Reported {} shape(s), skipped {} unknown and {} malformed line(s)",
            summary.reported, summary.skipped_unknown, summary.skipped_malformed
        );
        Ok(summary)
    }
}
