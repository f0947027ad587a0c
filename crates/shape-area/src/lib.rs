//! # shape-area
//!
//! Reads a line-oriented shape description file and reports the area of
//! every rectangle, circle and triangle it describes.
//!
//! ## File format
//!
//! One shape per line, comma separated, no header:
//!
//! ```text
//! Rectangle,4,5
//! Circle,3
//! Triangle,6,2
//! ```
//!
//! Kind names are case-sensitive. Lines naming any other kind are skipped
//! without output. Parameters are integers.
//!
//! ## Output
//!
//! ```text
//! Area of the Rectangle is:  20
//! Area of the Circle is:  28.26
//! Area of the Triangle is:  6.0
//! ```
//!
//! Circle areas use `3.14` for pi.
//!
//! ## Example
//!
//! ```no_run
//! use shape_area::{CalculatorConfig, ShapeAreaCalculator};
//!
//! let calculator = ShapeAreaCalculator::new(CalculatorConfig::default());
//! let summary = calculator.run("shape.txt", &mut std::io::stdout())?;
//! eprintln!("{} shape(s) reported", summary.reported);
//! # Ok::<(), shape_area::ShapeError>(())
//! ```

mod area;
mod calculator;
mod config;
mod error;
mod parse;
mod shape;

pub use area::Area;
pub use calculator::{label, load_lines, AreaReport, Reports, RunSummary, ShapeAreaCalculator};
pub use config::{CalculatorConfig, LabelStyle, MalformedPolicy};
pub use error::{ConfigErrorSource, MalformedReason, ShapeError};
pub use parse::{parse_line, Parsed, FIELD_SEPARATOR};
pub use shape::{Circle, ComputeArea, Rectangle, Shape, ShapeKind, Triangle, PI_APPROX};

/// Result type for shape area operations.
pub type Result<T> = std::result::Result<T, ShapeError>;
