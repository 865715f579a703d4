//! Process-wide logging bootstrap.
//!
//! # Responsibility
//! - Start rolling file logs once per process for the host app or CLI.
//! - Capture panics as sanitized log events.
//!
//! # Invariants
//! - Initialization never panics.
//! - Repeated init with the same level and directory is a no-op.
//! - Init with a different level or directory is rejected.
//! - Log lines carry metadata only; goal text is never logged.

use flexi_logger::{
    Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::panic::PanicHookInfo;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "goalboard";
const LOG_FILE_SUFFIX: &str = "log";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 5;
const PANIC_SUMMARY_MAX_CHARS: usize = 160;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    level: LevelFilter,
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

impl ActiveLogger {
    fn accepts(&self, level: LevelFilter, log_dir: &Path) -> Result<(), String> {
        if self.log_dir != log_dir {
            return Err(format!(
                "logging already initialized at `{}`; refusing to switch to `{}`",
                self.log_dir.display(),
                log_dir.display()
            ));
        }
        if self.level != level {
            return Err(format!(
                "logging already initialized with level `{}`; refusing to switch to `{}`",
                level_name(self.level),
                level_name(level)
            ));
        }
        Ok(())
    }
}

/// Initializes logging at `level` into the absolute directory `log_dir`.
///
/// # Errors
/// - `level` is not one of `trace|debug|info|warn|error`.
/// - `log_dir` is empty, relative, or cannot be created.
/// - Logging is already active with another level or directory.
/// - The logger backend fails to start.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = parse_level(level)?;
    let log_dir = parse_log_dir(log_dir)?;

    if let Some(active) = ACTIVE.get() {
        return active.accepts(level, &log_dir);
    }

    let active = ACTIVE.get_or_try_init(|| start(level, log_dir.clone()))?;
    // Another thread may have won the init race with different settings.
    active.accepts(level, &log_dir)
}

fn start(level: LevelFilter, log_dir: PathBuf) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(&log_dir)
        .map_err(|err| format!("cannot create log directory `{}`: {err}", log_dir.display()))?;

    let files = FileSpec::default()
        .directory(log_dir.as_path())
        .basename(LOG_FILE_BASENAME)
        .suffix(LOG_FILE_SUFFIX);
    let handle = Logger::with(LogSpecification::builder().default(level).build())
        .log_to_file(files)
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook();

    info!(
        "event=core_init module=logging status=ok platform={} build={} version={} level={} rotate_bytes={} keep_files={}",
        std::env::consts::OS,
        if cfg!(debug_assertions) { "debug" } else { "release" },
        env!("CARGO_PKG_VERSION"),
        level_name(level),
        ROTATE_AT_BYTES,
        KEEP_LOG_FILES
    );

    Ok(ActiveLogger {
        level,
        log_dir,
        _handle: handle,
    })
}

/// Returns `(level, log_dir)` when logging is active.
pub fn logging_status() -> Option<(LevelFilter, PathBuf)> {
    ACTIVE
        .get()
        .map(|active| (active.level, active.log_dir.clone()))
}

/// Level name used when the host passes none: `debug` in debug builds,
/// `info` in release builds.
pub fn default_log_level() -> &'static str {
    level_name(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    })
}

fn level_name(level: LevelFilter) -> &'static str {
    match level {
        LevelFilter::Off => "off",
        LevelFilter::Error => "error",
        LevelFilter::Warn => "warn",
        LevelFilter::Info => "info",
        LevelFilter::Debug => "debug",
        LevelFilter::Trace => "trace",
    }
}

fn parse_level(raw: &str) -> Result<LevelFilter, String> {
    let name = raw.trim().to_ascii_lowercase();
    let name = if name == "warning" { "warn" } else { name.as_str() };
    match name.parse::<LevelFilter>() {
        Ok(LevelFilter::Off) | Err(_) => Err(format!(
            "unsupported log level `{name}`; expected trace|debug|info|warn|error"
        )),
        Ok(level) => Ok(level),
    }
}

fn parse_log_dir(raw: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(raw.trim());
    if path.as_os_str().is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    if path.is_relative() {
        return Err(format!(
            "log_dir must be an absolute path, got `{}`",
            path.display()
        ));
    }
    Ok(path)
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map_or_else(|| "unknown".to_string(), |loc| format!("{}:{}", loc.file(), loc.line()));
        error!(
            "event=panic_captured module=logging status=error location={} payload={}",
            location,
            summarize_panic(info)
        );
        previous_hook(info);
    }));
}

fn summarize_panic(info: &PanicHookInfo<'_>) -> String {
    let payload = info.payload();
    let message = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload");
    single_line_capped(message, PANIC_SUMMARY_MAX_CHARS)
}

/// Flattens line breaks and caps the result at `max_chars` plus an ellipsis.
fn single_line_capped(value: &str, max_chars: usize) -> String {
    let mut chars = value
        .chars()
        .map(|ch| if ch == '\n' || ch == '\r' { ' ' } else { ch });
    let mut out = chars.by_ref().take(max_chars).collect::<String>();
    if chars.next().is_some() {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{default_log_level, level_name, parse_level, parse_log_dir, single_line_capped};
    use log::LevelFilter;

    #[test]
    fn parse_level_accepts_known_values() {
        assert_eq!(parse_level("TRACE").expect("TRACE should parse"), LevelFilter::Trace);
        assert_eq!(
            parse_level(" warning ").expect("warning should parse"),
            LevelFilter::Warn
        );
    }

    #[test]
    fn parse_level_rejects_unknown_and_off() {
        let error = parse_level("verbose").expect_err("verbose is not a level");
        assert!(error.contains("unsupported log level"));

        let error = parse_level("off").expect_err("off would silence init events");
        assert!(error.contains("unsupported log level `off`"));
    }

    #[test]
    fn parse_log_dir_rejects_relative_and_empty_paths() {
        let error = parse_log_dir("logs/dev").expect_err("relative paths must be rejected");
        assert!(error.contains("absolute"));

        let error = parse_log_dir("   ").expect_err("blank paths must be rejected");
        assert!(error.contains("empty"));
    }

    #[test]
    fn default_level_round_trips_through_parse() {
        let level = parse_level(default_log_level()).expect("default level parses");
        assert_eq!(level_name(level), default_log_level());
    }

    #[test]
    fn single_line_capped_flattens_and_truncates() {
        assert_eq!(single_line_capped("goal\nRun 5k\rtoday", 8), "goal Run...");
        assert_eq!(single_line_capped("exactly8", 8), "exactly8");
        assert_eq!(single_line_capped("short", 160), "short");
    }
}
