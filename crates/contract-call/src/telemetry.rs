use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::IsTerminal;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::CallConfig;

/// Flushes buffered file logs when dropped.
#[derive(Debug)]
pub struct TelemetryGuard {
    _guard: Option<WorkerGuard>,
}

/// Where log lines end up.
enum LogSink {
    Stderr,
    File(File),
}

impl LogSink {
    /// Opens `config.log_file` for appending. Falls back to stderr, with the
    /// reason, when the file cannot be opened.
    fn from_config(config: &CallConfig) -> (Self, Option<String>) {
        match config.log_file.as_deref() {
            None => (LogSink::Stderr, None),
            Some(path) => match open_append(path) {
                Ok(file) => (LogSink::File(file), None),
                Err(err) => (
                    LogSink::Stderr,
                    Some(format!("failed to open log file {}: {}", path.display(), err)),
                ),
            },
        }
    }

    fn into_writer(self) -> (BoxMakeWriter, Option<WorkerGuard>, bool) {
        match self {
            LogSink::Stderr => (
                BoxMakeWriter::new(io::stderr),
                None,
                io::stderr().is_terminal(),
            ),
            LogSink::File(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                (BoxMakeWriter::new(non_blocking), Some(guard), false)
            }
        }
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global subscriber from `config`. `RUST_LOG` wins over
/// `config.log_level`.
pub fn init_tracing(config: &CallConfig) -> TelemetryGuard {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let (sink, open_failure) = LogSink::from_config(config);
    let (writer, guard, ansi) = sink.into_writer();

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(writer)
        .try_init()
        .is_ok();

    if let Some(reason) = open_failure {
        tracing::warn!("{}; logging to stderr", reason);
    }

    TelemetryGuard {
        _guard: guard.filter(|_| installed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config() -> CallConfig {
        CallConfig::from_lookup(|_| None)
    }

    #[test]
    fn test_sink_defaults_to_stderr() {
        let (sink, failure) = LogSink::from_config(&config());
        assert!(matches!(sink, LogSink::Stderr));
        assert!(failure.is_none());
    }

    #[test]
    fn test_sink_opens_configured_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("calls.log");

        let (sink, failure) = LogSink::from_config(&config().with_log_file(&path));

        assert!(matches!(sink, LogSink::File(_)));
        assert!(failure.is_none());
        assert!(path.exists());
    }

    #[test]
    fn test_sink_falls_back_when_file_cannot_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("calls.log");

        let (sink, failure) = LogSink::from_config(&config().with_log_file(&path));

        assert!(matches!(sink, LogSink::Stderr));
        assert!(failure.unwrap().contains("failed to open log file"));
    }
}
