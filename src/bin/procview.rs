//! procview - terminal dashboard for process metrics.
//!
//! Usage:
//!   procview                 # all processes, 1 second refresh
//!   procview 2               # all processes, 2 second refresh
//!   procview -p 4242         # single process view for PID 4242
//!   procview --log-file dash.log -vv
//!
//! Snapshots come from the built-in synthetic provider; samplers embed the
//! library and feed `ChannelProvider` instead.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::{ArgAction, Parser};
use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use procview::provider::{MockProvider, Scenario, SnapshotProvider};
use procview::tui::{App, DashboardStyle, Page};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

/// Terminal dashboard for process metrics.
#[derive(Parser)]
#[command(name = "procview", about = "Process metrics dashboard")]
struct Args {
    /// Refresh interval in seconds (default: 1).
    #[arg(value_name = "INTERVAL")]
    interval: Option<u64>,

    /// Show a single process instead of the process listing.
    #[arg(short = 'p', long = "pid", value_name = "PID")]
    pid: Option<u32>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Write logs to this file. Without it nothing is logged, since the
    /// dashboard owns the terminal.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let interval = args.interval.unwrap_or(1);
    if interval == 0 {
        eprintln!("Error: interval must be at least 1 second");
        std::process::exit(1);
    }

    if let Some(ref path) = args.log_file
        && let Err(e) = init_logging(path, args.verbose, args.quiet)
    {
        eprintln!("Error opening log file '{}': {}", path.display(), e);
        std::process::exit(1);
    }

    let (width, height) = match crossterm::terminal::size() {
        Ok(size) => size,
        Err(e) => {
            eprintln!("Error reading terminal size: {}", e);
            std::process::exit(1);
        }
    };

    let style = DashboardStyle::default();
    let (page, scenario) = match args.pid {
        Some(pid) => (
            Page::single_process(&style, width, height),
            Scenario::SingleProcess { pid },
        ),
        None => (
            Page::all_processes(&style, width, height),
            Scenario::AllProcesses,
        ),
    };
    let page = match page {
        Ok(page) => page,
        Err(e) => {
            eprintln!("Error building dashboard: {}", e);
            std::process::exit(1);
        }
    };

    let provider: Box<dyn SnapshotProvider> = Box::new(MockProvider::new(scenario));
    let app = App::new(provider, page);

    if let Err(e) = app.run(Duration::from_secs(interval)) {
        tracing::error!(%e, "dashboard failed");
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}

/// Installs a file-backed tracing subscriber.
/// Default level is INFO. Use -v/-vv for more, -q for errors only.
/// `RUST_LOG` directives take precedence.
fn init_logging(path: &Path, verbose: u8, quiet: bool) -> std::io::Result<()> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
