//! `shape-area` command line tool.
//!
//! Usage: shape-area [OPTIONS] <FILE>

use clap::Parser;
use shape_area::{CalculatorConfig, LabelStyle, MalformedPolicy, ShapeAreaCalculator, ShapeError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "shape-area",
    version,
    about = "Print the area of every shape described in a text file"
)]
struct Args {
    /// Shape file, one `<kind>,<param>[,<param>]` record per line
    file: PathBuf,

    /// YAML config file (keys: on_malformed, label_style)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log and skip malformed lines instead of aborting
    #[arg(long)]
    skip_malformed: bool,

    /// Print the historical "Recatangle" label for rectangles
    #[arg(long)]
    legacy_labels: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Build the calculator config: file first, then command line overrides.
    fn calculator_config(&self) -> Result<CalculatorConfig, ShapeError> {
        let mut config = match &self.config {
            Some(path) => CalculatorConfig::from_file(path)?,
            None => CalculatorConfig::default(),
        };
        if self.skip_malformed {
            config.on_malformed = MalformedPolicy::Skip;
        }
        if self.legacy_labels {
            config.label_style = LabelStyle::Legacy;
        }
        Ok(config)
    }
}

/// Initialise logging to stderr. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), ShapeError> {
    let config = args.calculator_config()?;
    info!("Processing {} with {:?}", args.file.display(), config);

    let calculator = ShapeAreaCalculator::new(config);
    let stdout = std::io::stdout();
    let summary = calculator.run(&args.file, &mut stdout.lock())?;

    info!(
        "Done: {} reported, {} unknown, {} malformed skipped",
        summary.reported, summary.skipped_unknown, summary.skipped_malformed
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsString;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from(["shape-area", "--skip-malformed", "--legacy-labels", "s.txt"]);
        let config = args.calculator_config().unwrap();
        assert_eq!(config.on_malformed, MalformedPolicy::Skip);
        assert_eq!(config.label_style, LabelStyle::Legacy);
        assert_eq!(args.file, PathBuf::from("s.txt"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("shapes.yaml");
        std::fs::write(&config_path, "on_malformed: abort\nlabel_style: legacy\n").unwrap();

        let args = Args::parse_from([
            OsString::from("shape-area"),
            OsString::from("-c"),
            config_path.into_os_string(),
            OsString::from("--skip-malformed"),
            OsString::from("s.txt"),
        ]);
        let config = args.calculator_config().unwrap();
        assert_eq!(config.on_malformed, MalformedPolicy::Skip);
        assert_eq!(config.label_style, LabelStyle::Legacy);
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let args = Args::parse_from(["shape-area", "--config", "no/such.yaml", "s.txt"]);
        assert!(matches!(
            args.calculator_config(),
            Err(ShapeError::Config { .. })
        ));
    }

    #[test]
    fn test_run_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("shape.txt");
        let args = Args::parse_from([OsString::from("shape-area"), missing.into_os_string()]);

        let err = run(&args).unwrap_err();
        assert!(matches!(err, ShapeError::FileNotFound { .. }));
        assert!(err.to_string().contains("shape.txt"));
    }

    #[test]
    fn test_run_stops_on_malformed_line_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shape.txt");
        std::fs::write(&path, "Hexagon,1\nCircle,abc\nCircle,3\n").unwrap();
        let args = Args::parse_from([OsString::from("shape-area"), path.into_os_string()]);

        match run(&args) {
            Err(ShapeError::MalformedLine {
                line_number, line, ..
            }) => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "Circle,abc");
            }
            other => panic!("expected malformed line error, got {:?}", other),
        }
    }

    #[test]
    fn test_run_skips_malformed_line_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shape.txt");
        std::fs::write(&path, "Circle,abc\n").unwrap();
        let args = Args::parse_from([
            OsString::from("shape-area"),
            OsString::from("--skip-malformed"),
            path.into_os_string(),
        ]);

        assert!(run(&args).is_ok());
    }

    #[test]
    fn test_verbose_count() {
        let args = Args::parse_from(["shape-area", "-vv", "s.txt"]);
        assert_eq!(args.verbose, 2);
    }
}
