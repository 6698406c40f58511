//! Rolling Logger
//!
//! Installs a global `tracing` subscriber that writes to stdout and to
//! `{dir}/{app}.log`. When the active file grows past its size limit it is
//! shifted to `{app}.1.log`, older files move up one slot, and the oldest
//! falls off the end, so at most `max_files` files exist at any time.
//!
//! `log` records are bridged into the same subscriber.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Default size of one log file before rotation
pub const DEFAULT_MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;
/// Default number of files kept, including the active one
pub const DEFAULT_MAX_FILES: usize = 5;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("log file error: {0}")]
    Io(#[from] io::Error),
    #[error("logger already installed: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Rotation limits
#[derive(Debug, Clone, Copy)]
pub struct RollingConfig {
    pub max_file_bytes: u64,
    pub max_files: usize,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

/// Size-rotated log file
pub struct RollingFile {
    dir: PathBuf,
    app_name: String,
    config: RollingConfig,
    file: File,
    written: u64,
}

impl RollingFile {
    /// Open (or append to) `{dir}/{app_name}.log`
    pub fn open(dir: impl AsRef<Path>, app_name: &str, config: RollingConfig) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        let active = dir.join(format!("{}.log", app_name));
        let file = OpenOptions::new().create(true).append(true).open(&active)?;
        let written = file.metadata()?.len();

        Ok(Self {
            dir,
            app_name: app_name.to_string(),
            config,
            file,
            written,
        })
    }

    /// Path of slot `n` (0 = active file)
    pub fn slot_path(&self, n: usize) -> PathBuf {
        if n == 0 {
            self.dir.join(format!("{}.log", self.app_name))
        } else {
            self.dir.join(format!("{}.{}.log", self.app_name, n))
        }
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        let last = self.config.max_files.saturating_sub(1);
        if last == 0 {
            // Single-file ring: just truncate
            self.file = File::create(self.slot_path(0))?;
            self.written = 0;
            return Ok(());
        }

        let oldest = self.slot_path(last);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (0..last).rev() {
            let from = self.slot_path(n);
            if from.exists() {
                fs::rename(&from, self.slot_path(n + 1))?;
            }
        }

        self.file = OpenOptions::new().create(true).append(true).open(self.slot_path(0))?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.config.max_file_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Local wall-clock timestamps
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize logging with default rotation limits
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(log_dir, app_name, RollingConfig::default())
}

/// Initialize logging with explicit rotation limits.
///
/// Level filtering comes from `RUST_LOG`, defaulting to `info`.
pub fn init_logger_with(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    config: RollingConfig,
) -> Result<(), LoggerError> {
    let log_dir = log_dir.as_ref();
    let rolling = RollingFile::open(log_dir, app_name, config)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_timer(LocalTime).with_writer(io::stdout))
        .with(
            fmt::layer()
                .with_timer(LocalTime)
                .with_ansi(false)
                .with_writer(Mutex::new(rolling)),
        )
        .try_init()?;

    tracing::info!("{} logging to {}", app_name, log_dir.display());
    Ok(())
}
