// pinmap CLI - locate PCB components on a two-tier board grid

mod exit_codes;
mod render;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use pinmap_engine::{grid_view, BoardSpec, ComponentRecord};
use pinmap_io::{load, CentroidError, LoadReport};

use exit_codes::{EXIT_ERROR, EXIT_FILE, EXIT_NOT_FOUND, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "pinmap")]
#[command(about = "Locate PCB components from centroid files on a two-tier board grid")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Board geometry shared by every subcommand.
#[derive(Args)]
struct BoardArgs {
    /// Board width in mm
    #[arg(long, default_value_t = 100.0)]
    width: f64,

    /// Board height in mm
    #[arg(long, default_value_t = 100.0)]
    height: f64,

    /// Primary grid rows (lettered A upward from the bottom)
    #[arg(long, default_value_t = 4)]
    rows: usize,

    /// Primary grid columns
    #[arg(long, default_value_t = 4)]
    cols: usize,

    /// Secondary subdivision inside each primary zone
    #[arg(long, default_value_t = 3)]
    subdiv: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a centroid file and print the detected configuration
    #[command(after_help = "\
Examples:
  pinmap map placements.csv
  pinmap map placements.csv --width 160 --height 100
  pinmap map placements.csv --json")]
    Map {
        /// Centroid file (comma-separated pick and place export)
        file: PathBuf,

        #[command(flatten)]
        board: BoardArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Suppress stderr warnings (duplicates, skipped rows)
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Look up designators and show their zones on the grid
    #[command(after_help = "\
Exit code 3 means at least one designator was not found.

Examples:
  pinmap find placements.csv C102
  pinmap find placements.csv c102 R16 U3
  pinmap find placements.csv C102 --json")]
    Find {
        /// Centroid file
        file: PathBuf,

        /// Designators to look up (case-insensitive)
        #[arg(required = true)]
        designators: Vec<String>,

        #[command(flatten)]
        board: BoardArgs,

        /// Emit one JSON object per designator instead of text
        #[arg(long)]
        json: bool,

        /// Suppress stderr warnings
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Interactively search designators read line-by-line from stdin
    #[command(after_help = "\
Reads one designator per line; 'q' or EOF quits, blank lines re-prompt.

Example:
  pinmap search placements.csv")]
    Search {
        /// Centroid file
        file: PathBuf,

        #[command(flatten)]
        board: BoardArgs,

        /// Suppress stderr warnings
        #[arg(long, short = 'q')]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Map { file, board, json, quiet } => cmd_map(&file, &board, json, quiet),
        Commands::Find { file, designators, board, json, quiet } => {
            cmd_find(&file, &designators, &board, json, quiet)
        }
        Commands::Search { file, board, quiet } => cmd_search(&file, &board, quiet),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    pub fn file(msg: impl Into<String>) -> Self {
        Self { code: EXIT_FILE, message: msg.into(), hint: None }
    }

    /// Silent error carrying only the exit code (message already printed).
    pub fn code_only(code: u8) -> Self {
        Self { code, message: String::new(), hint: None }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

fn build_board(args: &BoardArgs) -> Result<BoardSpec, CliError> {
    BoardSpec::new(args.width, args.height, args.rows, args.cols, args.subdiv)
        .map_err(|e| CliError::args(e.to_string()))
}

/// Load the file and print its row-level warnings to stderr.
fn load_report(file: &Path, board: &BoardSpec, quiet: bool) -> Result<LoadReport, CliError> {
    let report = load(file, board).map_err(|e| {
        let err = CliError::file(format!("{}: {e}", file.display()));
        match e {
            CentroidError::HeaderNotFound => {
                err.with_hint("expected a quoted \"Designator\" header row")
            }
            CentroidError::MissingColumn(_) => {
                err.with_hint("column names must match the detected unit system")
            }
            _ => err,
        }
    })?;

    if !quiet {
        for warning in &report.warnings {
            eprintln!("warning: {warning}");
        }
    }
    Ok(report)
}

// ============================================================================
// map
// ============================================================================

fn cmd_map(file: &Path, board_args: &BoardArgs, json: bool, quiet: bool) -> Result<(), CliError> {
    let board = build_board(board_args)?;
    let report = load_report(file, &board, quiet)?;
    let units = report.dialect.units;
    let header_line = report.dialect.header_row.unwrap_or(0) + 1;

    if json {
        let summary = serde_json::json!({
            "file": file.display().to_string(),
            "board": {
                "width_mm": board.width_mm(),
                "height_mm": board.height_mm(),
                "rows": board.rows(),
                "cols": board.cols(),
                "subdiv": board.subdiv(),
            },
            "header_line": header_line,
            "units": units.to_string(),
            "conversion_factor": units.conversion_factor(),
            "columns": [units.x_column(), units.y_column()],
            "mapped": report.registry.len(),
            "warnings": report.warnings.len(),
        });
        println!("{summary}");
        return Ok(());
    }

    println!(
        "board:   {}x{}mm, {}x{} primary grid (zone {:.2}x{:.2}mm), {}x{} subdivision",
        board.width_mm(),
        board.height_mm(),
        board.rows(),
        board.cols(),
        board.zone_width(),
        board.zone_height(),
        board.subdiv(),
        board.subdiv(),
    );
    println!("header:  line {header_line}");
    println!("units:   {units} (factor {})", units.conversion_factor());
    println!("columns: {}, {}", units.x_column(), units.y_column());
    println!(
        "mapped:  {} unique components, {} warning(s)",
        report.registry.len(),
        report.warnings.len()
    );
    Ok(())
}

// ============================================================================
// find
// ============================================================================

fn cmd_find(
    file: &Path,
    designators: &[String],
    board_args: &BoardArgs,
    json: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let board = build_board(board_args)?;
    let report = load_report(file, &board, quiet)?;

    let mut missed = 0usize;
    for designator in designators {
        match report.registry.find(designator) {
            Some(record) => {
                if json {
                    println!("{}", found_json(record));
                } else {
                    print_hit(&board, &report, record);
                }
            }
            None => {
                missed += 1;
                if json {
                    println!(
                        "{}",
                        serde_json::json!({ "designator": designator, "found": false })
                    );
                } else {
                    eprintln!("error: designator '{designator}' not found");
                }
            }
        }
    }

    if missed > 0 {
        return Err(CliError::code_only(EXIT_NOT_FOUND));
    }
    Ok(())
}

fn found_json(record: &ComponentRecord) -> serde_json::Value {
    serde_json::json!({
        "designator": record.designator,
        "found": true,
        "zone": record.zone.to_string(),
        "primary": record.zone.primary.to_string(),
        "layer": record.layer,
        "x_mm": record.x_mm,
        "y_mm": record.y_mm,
    })
}

fn print_hit(board: &BoardSpec, report: &LoadReport, record: &ComponentRecord) {
    let view = grid_view(board, &report.registry, Some(record.zone.primary));
    print!("{}", render::render_grid(&view));
    println!("found: {}", record.designator);
    println!(
        "  zone:  {} (primary {}, secondary row {} col {})",
        record.zone, record.zone.primary, record.zone.sec_row, record.zone.sec_col
    );
    println!("  side:  {}", record.layer);
    println!("  x/y:   {:.2}mm, {:.2}mm", record.x_mm, record.y_mm);
}

// ============================================================================
// search
// ============================================================================

fn cmd_search(file: &Path, board_args: &BoardArgs, quiet: bool) -> Result<(), CliError> {
    let board = build_board(board_args)?;
    let report = load_report(file, &board, quiet)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("designator> ");
        io::stdout().flush().map_err(|e| CliError::io(e.to_string()))?;

        let line = match lines.next() {
            Some(line) => line.map_err(|e| CliError::io(e.to_string()))?,
            None => break, // EOF
        };
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query.eq_ignore_ascii_case("q") {
            break;
        }

        match report.registry.find(query) {
            Some(record) => print_hit(&board, &report, record),
            None => println!("not found: '{query}'"),
        }
    }
    Ok(())
}
