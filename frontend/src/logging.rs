//! 浏览器控制台日志
//!
//! `tracing` 事件经 `tracing-subscriber` 格式化后写到 `console.*`。
//! WASM 中没有系统时钟，因此不输出时间戳。

use leptos::leptos_dom::logging::{console_error, console_log, console_warn};
use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Copy, Default)]
struct Console;

/// 缓冲一条格式化后的事件，drop 时一次性输出
struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        match self.level {
            Level::ERROR => console_error(line),
            Level::WARN => console_warn(line),
            _ => console_log(line),
        }
    }
}

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// 安装全局订阅者；重复调用只会告警
pub fn init() {
    let max_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let installed = tracing_subscriber::fmt()
        .with_writer(Console)
        .without_time()
        .with_target(false)
        .with_max_level(max_level)
        .try_init();

    if let Err(e) = installed {
        console_warn(&format!("logging already initialised: {e}"));
    }
}
