//! File logging
//!
//! Terminal output is reserved for results, so diagnostics go to
//! `{data_dir}/bizsim.log`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_NAME: &str = "bizsim.log";
/// Size at which the log is truncated (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Newest bytes kept after truncation (1 MB)
const KEEP_SIZE: u64 = 1024 * 1024;

/// Drop all but the newest `keep` bytes of the log once it grows past `max`.
///
/// The kept tail starts at a line boundary.
fn truncate_log(log_path: &Path, max: u64, keep: u64) -> io::Result<bool> {
    let len = match fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= max {
        return Ok(false);
    }

    let mut tail = Vec::with_capacity(keep as usize);
    {
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(len.saturating_sub(keep)))?;
        file.read_to_end(&mut tail)?;
    }

    let line_start = tail.iter().position(|&b| b == b'\n').map_or(0, |i| i + 1);

    let mut file = File::create(log_path)?;
    file.write_all(b"--- earlier entries truncated ---\n")?;
    file.write_all(&tail[line_start..])?;
    Ok(true)
}

/// Hands out handles to one shared log file
#[derive(Clone)]
struct SharedLog(Arc<Mutex<File>>);

impl SharedLog {
    fn with_file<T>(&self, f: impl FnOnce(&mut File) -> io::Result<T>) -> io::Result<T> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        f(&mut file)
    }
}

impl Write for SharedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_file(|file| file.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.with_file(|file| file.flush())
    }
}

impl<'a> MakeWriter<'a> for SharedLog {
    type Writer = SharedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Initialize logging to a file in the data directory.
///
/// `RUST_LOG` takes precedence over `level`.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join(LOG_FILE_NAME);

    if let Err(e) = truncate_log(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: failed to truncate {}: {}", log_path.display(), e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bizsim={level},bizsim_core=warn")));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(SharedLog(Arc::new(Mutex::new(file))))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(log_path = %log_path.display(), "logging initialized");
    Ok(())
}
