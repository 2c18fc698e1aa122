//! Rolling Logger
//!
//! A `tracing` subscriber writing to one log file per day
//! (`<app>-<YYYY-MM-DD>.log`), keeping only the newest `max_files` files,
//! and mirroring recent lines into an in-memory circular buffer.
//!
//! Records emitted through the `log` facade are bridged into the same
//! subscriber, so library crates can keep using `log::info!`.

use chrono::{Local, NaiveDate};
use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
use tracing_subscriber::fmt::MakeWriter;

static WRITER: OnceLock<RollingFileWriter> = OnceLock::new();

/// Logger errors
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("log io error: {0}")]
    Io(#[from] io::Error),
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
}

#[derive(Debug, Clone)]
pub struct LoggerOptions {
    /// Number of daily files kept on disk
    pub max_files: usize,
    /// Number of recent lines kept in memory
    pub buffer_lines: usize,
    pub level: tracing::Level,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            max_files: 7,
            buffer_lines: 500,
            level: tracing::Level::INFO,
        }
    }
}

struct Inner {
    dir: PathBuf,
    app_name: String,
    max_files: usize,
    current_date: Option<NaiveDate>,
    file: Option<File>,
    recent: VecDeque<String>,
    capacity: usize,
}

/// File writer that rolls over at local midnight
#[derive(Clone)]
pub struct RollingFileWriter {
    inner: Arc<Mutex<Inner>>,
}

impl RollingFileWriter {
    pub fn new(dir: impl Into<PathBuf>, app_name: &str, max_files: usize, buffer_lines: usize) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                dir,
                app_name: app_name.to_string(),
                max_files: max_files.max(1),
                current_date: None,
                file: None,
                recent: VecDeque::with_capacity(buffer_lines),
                capacity: buffer_lines,
            })),
        })
    }

    /// Path of the log file for a given day
    pub fn path_for(&self, date: NaiveDate) -> io::Result<PathBuf> {
        let inner = self.lock()?;
        Ok(file_path(&inner.dir, &inner.app_name, date))
    }

    /// Lines currently held in the circular buffer, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.inner.lock() {
            Ok(inner) => inner.recent.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| io::Error::other("log writer lock poisoned"))
    }

    fn write_at(&self, date: NaiveDate, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self.lock()?;

        if inner.current_date != Some(date) || inner.file.is_none() {
            let path = file_path(&inner.dir, &inner.app_name, date);
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            inner.file = Some(file);
            inner.current_date = Some(date);
            prune(&inner.dir, &inner.app_name, inner.max_files)?;
        }

        if let Some(file) = inner.file.as_mut() {
            file.write_all(buf)?;
        }

        if inner.capacity > 0 {
            let text = String::from_utf8_lossy(buf);
            for line in text.lines().filter(|l| !l.trim().is_empty()) {
                if inner.recent.len() == inner.capacity {
                    inner.recent.pop_front();
                }
                inner.recent.push_back(line.to_string());
            }
        }

        Ok(buf.len())
    }
}

impl Write for RollingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_at(Local::now().date_naive(), buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut inner = self.lock()?;
        match inner.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for RollingFileWriter {
    type Writer = RollingFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn file_path(dir: &Path, app_name: &str, date: NaiveDate) -> PathBuf {
    dir.join(format!("{}-{}.log", app_name, date.format("%Y-%m-%d")))
}

/// Remove the oldest files beyond `max_files`
fn prune(dir: &Path, app_name: &str, max_files: usize) -> io::Result<()> {
    let prefix = format!("{}-", app_name);
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with(&prefix) && n.ends_with(".log"))
                .unwrap_or(false)
        })
        .collect();

    if files.len() <= max_files {
        return Ok(());
    }

    // Date suffix sorts lexicographically
    files.sort();
    let excess = files.len() - max_files;
    for path in files.into_iter().take(excess) {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Initialize the global logger with default options
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(log_dir, app_name, LoggerOptions::default())
}

pub fn init_logger_with(log_dir: PathBuf, app_name: &str, options: LoggerOptions) -> Result<(), LoggerError> {
    if WRITER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let writer = RollingFileWriter::new(log_dir, app_name, options.max_files, options.buffer_lines)?;

    tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_ansi(false)
        .with_max_level(options.level)
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    // Bridged `log` records below the level are dropped before formatting
    log::set_max_level(log_level_filter(options.level));

    WRITER.set(writer).map_err(|_| LoggerError::AlreadyInitialized)?;
    tracing::info!(app = app_name, "logger initialized");
    Ok(())
}

fn log_level_filter(level: tracing::Level) -> log::LevelFilter {
    if level == tracing::Level::TRACE {
        log::LevelFilter::Trace
    } else if level == tracing::Level::DEBUG {
        log::LevelFilter::Debug
    } else if level == tracing::Level::INFO {
        log::LevelFilter::Info
    } else if level == tracing::Level::WARN {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Error
    }
}

fn ensure_init() -> Result<(), LoggerError> {
    WRITER.get().map(|_| ()).ok_or(LoggerError::NotInitialized)
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    ensure_init()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), LoggerError> {
    ensure_init()?;
    tracing::warn!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    ensure_init()?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Recent log lines, oldest first (empty before init)
pub fn recent_logs() -> Vec<String> {
    WRITER.get().map(|w| w.recent()).unwrap_or_default()
}
