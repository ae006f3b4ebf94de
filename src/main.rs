//! CLI entry point for canopy

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use canopy::{GlyphStyle, RenderConfig, ScanConfig, Session, SizeRange, format_size};
use clap::{Parser, ValueEnum};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Tree drawing style
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum StyleArg {
    #[default]
    Unicode,
    Ascii,
    Simple,
}

impl From<StyleArg> for GlyphStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Unicode => GlyphStyle::Unicode,
            StyleArg::Ascii => GlyphStyle::Ascii,
            StyleArg::Simple => GlyphStyle::Simple,
        }
    }
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "Visualize a directory as a text tree, interactive HTML or JSON")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Maximum depth to scan
    #[arg(short = 'd', long = "max-depth")]
    max_depth: Option<usize>,

    /// Include hidden files and folders
    #[arg(long)]
    hidden: bool,

    /// Only show directories, not files
    #[arg(long = "no-files")]
    no_files: bool,

    /// Only include files with these extensions (e.g. .py txt)
    #[arg(short = 'e', long = "extensions", num_args = 1..)]
    extensions: Vec<String>,

    /// Minimum file size. Use suffixes: K, M, G (e.g. 1.5M); plain numbers are bytes
    #[arg(long = "min-size", value_name = "SIZE", value_parser = parse_file_size)]
    min_size: Option<u64>,

    /// Maximum file size. Use suffixes: K, M, G (e.g. 1.5M); plain numbers are bytes
    #[arg(long = "max-size", value_name = "SIZE", value_parser = parse_file_size)]
    max_size: Option<u64>,

    /// Tree drawing style
    #[arg(long, value_enum, default_value = "unicode")]
    style: StyleArg,

    /// Hide file and folder sizes
    #[arg(long = "no-size")]
    no_size: bool,

    /// Hide file and folder counts
    #[arg(long = "no-count")]
    no_count: bool,

    /// Maximum line width (at least 4: one character plus "...")
    #[arg(short = 'w', long = "width", default_value = "100", value_parser = clap::value_parser!(u64).range(4..))]
    width: u64,

    /// Save the text tree to a file
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,

    /// Save as an interactive HTML file
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,

    /// Save as a JSON file
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Title for the HTML page (default: "Directory Tree - <name>")
    #[arg(long)]
    title: Option<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log skipped entries and scan details to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Parse a file size string like "5M", "1.5K", "1G" into bytes.
/// Supports suffixes: B, K/KB (1024), M/MB (1024^2), G/GB (1024^3)
/// Without suffix, interprets as bytes.
fn parse_file_size(s: &str) -> Result<u64, String> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("GB") {
        (n, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(n) = s.strip_suffix("MB") {
        (n, 1024.0 * 1024.0)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024.0 * 1024.0)
    } else if let Some(n) = s.strip_suffix("KB") {
        (n, 1024.0)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024.0)
    } else if let Some(n) = s.strip_suffix('B') {
        (n, 1.0)
    } else {
        (s.as_str(), 1.0)
    };

    let num: f64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;
    if !num.is_finite() || num < 0.0 {
        return Err(format!("size must be a non-negative number: {}", num_str));
    }

    Ok((num * multiplier).round() as u64)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "canopy=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn write_status(stdout: &mut StandardStream, color: Color, text: &str) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(stdout, "{}", text)?;
    stdout.reset()?;
    writeln!(stdout)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let size_range = if args.min_size.is_some() || args.max_size.is_some() {
        Some(SizeRange::new(args.min_size, args.max_size))
    } else {
        None
    };

    let scan_config = ScanConfig {
        max_depth: args.max_depth,
        show_hidden: args.hidden,
        include_files: !args.no_files,
        ..Default::default()
    }
    .with_extensions(&args.extensions)
    .with_size_range(size_range);

    let render_config = RenderConfig {
        style: args.style.into(),
        show_size: !args.no_size,
        show_count: !args.no_count,
        max_line_width: usize::try_from(args.width).unwrap_or(usize::MAX),
    };

    let choice = if should_use_color(args.color) {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    if let Err(e) = run(&args, &scan_config, &render_config, &mut stdout) {
        eprintln!("canopy: {}", e);
        process::exit(1);
    }
}

fn run(
    args: &Args,
    scan_config: &ScanConfig,
    render_config: &RenderConfig,
    stdout: &mut StandardStream,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new();
    session.scan(&args.directory, scan_config)?;

    let text = session.render_text(render_config)?;
    writeln!(stdout, "{}", text)?;

    if let Some(path) = &args.save {
        session.save_text(path, render_config)?;
        write_status(stdout, Color::Green, &format!("\nTree saved to: {}", path.display()))?;
    }

    if let Some(path) = &args.html {
        let title = match &args.title {
            Some(title) => title.clone(),
            None => format!("Directory Tree - {}", session.result()?.display_name()),
        };
        session.export_html(path, &title)?;
        write_status(
            stdout,
            Color::Green,
            &format!("\nInteractive HTML saved to: {}", path.display()),
        )?;
    }

    if let Some(path) = &args.json {
        session.export_json(path)?;
        write_status(stdout, Color::Green, &format!("\nJSON data saved to: {}", path.display()))?;
    }

    let result = session.result()?;
    write_status(
        stdout,
        Color::Cyan,
        &format!(
            "\nSummary: {} files, {} folders, {} total",
            result.total_files(),
            result.total_folders(),
            format_size(result.total_size())
        ),
    )?;
    Ok(())
}
