//! Rolling Logger
//!
//! `tracing-subscriber` fmt setup whose writer sends every formatted event
//! to the browser console (stderr off wasm) and keeps the most recent lines
//! in a circular buffer, so they can be dumped when something goes wrong.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;
use tracing::subscriber::SetGlobalDefaultError;
use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::MakeWriter;

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LevelFilter,
    /// Maximum number of lines retained
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
            capacity: 200,
        }
    }
}

/// Shared circular buffer of formatted lines; also the fmt layer's writer
#[derive(Clone)]
pub struct RecentLines {
    capacity: usize,
    lines: Arc<Mutex<VecDeque<String>>>,
}

impl RecentLines {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
        }
    }

    /// Retained lines, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut lines) = self.lines.lock() {
            while lines.len() >= self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }
}

/// Collects one formatted event and emits it on drop
pub struct LineWriter<'a> {
    level: Level,
    buf: Vec<u8>,
    recent: &'a RecentLines,
}

impl io::Write for LineWriter<'_> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter<'_> {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf).trim_end().to_string();
        if line.is_empty() {
            return;
        }
        write_line(self.level, &line);
        self.recent.push(line);
    }
}

impl<'a> MakeWriter<'a> for RecentLines {
    type Writer = LineWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter {
            level: Level::INFO,
            buf: Vec::new(),
            recent: self,
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        LineWriter {
            level: *meta.level(),
            buf: Vec::new(),
            recent: self,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    let value = JsValue::from_str(line);
    if level == Level::ERROR {
        web_sys::console::error_1(&value);
    } else if level == Level::WARN {
        web_sys::console::warn_1(&value);
    } else if level == Level::INFO {
        web_sys::console::info_1(&value);
    } else {
        web_sys::console::debug_1(&value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Subscriber writing into `recent`, filtered at `config.level`
pub fn subscriber(config: &LoggerConfig, recent: RecentLines) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_writer(recent)
        .with_ansi(false)
        .with_timer(ChronoUtc::new("%H:%M:%S%.3f".to_string()))
        .with_max_level(config.level)
        .finish()
}

/// Installs the subscriber globally; keep the returned buffer for dumps
pub fn init(config: LoggerConfig) -> Result<RecentLines, SetGlobalDefaultError> {
    let recent = RecentLines::new(config.capacity);
    tracing::subscriber::set_global_default(subscriber(&config, recent.clone()))?;
    Ok(recent)
}
