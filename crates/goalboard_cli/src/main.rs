//! CLI entry point.
//!
//! # Responsibility
//! - Without flags: print a linkage check of `goalboard_core` linkage.
//! - With `--interactive`: drive one goal board from stdin lines, one
//!   submit per line, and print the screen after each submit.
//!
//! # Environment
//! - `GOALBOARD_LOG_DIR`: absolute directory for rolling logs. Unset disables logging.
//! - `GOALBOARD_LOG_LEVEL`: log level, defaults to the build-mode level.

use clap::Parser;
use goalboard_core::{default_log_level, init_logging, GoalBoard, GoalIdSource};
use log::info;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// Goalboard terminal front end.
#[derive(Parser, Debug)]
#[command(name = "goalboard", version, about)]
struct Cli {
    /// Read goals from stdin, one submit per line.
    #[arg(short, long)]
    interactive: bool,

    /// Absolute directory for rolling log files.
    #[arg(long, env = "GOALBOARD_LOG_DIR")]
    log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, env = "GOALBOARD_LOG_LEVEL")]
    log_level: Option<String>,
}

impl Cli {
    /// `(level, log_dir)` when a log directory was given.
    fn logging_settings(&self) -> Option<(&str, &str)> {
        let log_dir = self.log_dir.as_deref()?;
        let level = self.log_level.as_deref().unwrap_or(default_log_level());
        Some((level, log_dir))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some((level, log_dir)) = cli.logging_settings() {
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("goalboard: logging disabled: {err}");
        }
    }

    if !cli.interactive {
        println!("goalboard_core ping={}", goalboard_core::ping());
        println!("goalboard_core version={}", goalboard_core::core_version());
        return ExitCode::SUCCESS;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_session(&mut GoalBoard::new(), stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("goalboard: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Each input line is typed into the board and submitted as-is.
fn run_session<S: GoalIdSource>(
    board: &mut GoalBoard<S>,
    input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    write!(output, "{}", board.snapshot().render_plain())?;
    for line in input.lines() {
        board.set_text(line?);
        board.submit();
        write!(output, "{}", board.snapshot().render_plain())?;
    }
    output.flush()?;
    info!(
        "event=session_end module=cli status=ok goal_count={}",
        board.goals().len()
    );
    Ok(())
}
