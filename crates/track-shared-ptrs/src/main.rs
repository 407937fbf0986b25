use std::path::PathBuf;
use std::process;

use clap::Parser;
use tsp_core::{InvocationRequest, Launcher, LauncherConfig, TspResult, DEFAULT_LOG_LEVEL, DEFAULT_REPORT};
use tsp_utils::{debug, init_logging, LoggingGuard};

/// Run a program under gdb and track its std::shared_ptr instances.
///
/// The gdb extension records every shared_ptr acquire and release and writes
/// a JSON report when the program exits.
#[derive(Parser, Debug)]
#[command(name = "track-shared-ptrs")]
#[command(version)]
#[command(about = "Run a program under gdb and track its std::shared_ptr instances", long_about = None)]
struct Cli
{
    /// Log level of the gdb extension (passed through as-is)
    #[arg(
        long,
        value_name = "LEVEL",
        num_args = 0..=1,
        default_value = DEFAULT_LOG_LEVEL,
        default_missing_value = DEFAULT_LOG_LEVEL
    )]
    log: String,

    /// File the extension writes its report to
    #[arg(long, value_name = "NAME", default_value = DEFAULT_REPORT)]
    report: String,

    /// Debugger to run, looked up on PATH
    #[arg(long, value_name = "PROGRAM", default_value = tsp_core::config::DEFAULT_DEBUGGER)]
    debugger: PathBuf,

    /// gdb extension to source instead of the installed one
    #[arg(long, value_name = "PATH")]
    extension: Option<PathBuf>,

    /// Print the debugger command line instead of running it
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Program to debug, followed by its arguments
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    command: Vec<String>,
}

impl Cli
{
    fn request(&self) -> TspResult<InvocationRequest>
    {
        Ok(InvocationRequest::new(self.command.iter().cloned())?
            .with_log_level(self.log.as_str())
            .with_report(self.report.as_str()))
    }

    fn config(&self) -> LauncherConfig
    {
        let config = LauncherConfig::default().with_debugger(&self.debugger);
        match &self.extension {
            Some(extension) => config.with_extension(extension),
            None => config,
        }
    }
}

fn main()
{
    let cli = Cli::parse();

    // Initialize logging (reads from RUST_LOG env var)
    // Defaults to WARN so a normal launch stays quiet
    let guard = match init_logging() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(1);
        }
    };

    match run(cli, guard) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli, guard: LoggingGuard) -> TspResult<i32>
{
    let request = cli.request()?;
    let mut launcher = Launcher::new(cli.config());
    let command_line = launcher.prepare(&request);

    if cli.dry_run {
        println!("{command_line}");
        return Ok(0);
    }

    debug!(file_logging = guard.has_file(), "handing off to debugger");
    // Flush file logs; nothing after exec gets written
    drop(guard);

    launcher.hand_off(&command_line)
}
