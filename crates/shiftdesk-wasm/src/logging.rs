//! Forward core `tracing` events to the browser console.

use std::io;

use shiftdesk_core::logging::DEFAULT_FILTER;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsValue;

/// Buffers one formatted event and logs it as a single console line.
#[derive(Default)]
pub(crate) struct ConsoleWriter {
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn take_line(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let line = String::from_utf8_lossy(&self.buf).trim_end().to_string();
        self.buf.clear();
        Some(line)
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(line) = self.take_line() {
            web_sys::console::log_1(&JsValue::from_str(&line));
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

/// Install a console subscriber. Returns `false` if one was already set.
///
/// No timestamps: `SystemTime` is unavailable on `wasm32-unknown-unknown`.
pub(crate) fn init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
        .with_writer(ConsoleWriter::default)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_event_becomes_one_line() {
        let mut writer = ConsoleWriter::default();
        writer.write_all(b" INFO shiftdesk_core::transform: ").unwrap();
        writer.write_all(b"transform complete\n").unwrap();

        let line = writer.take_line().unwrap();
        assert_eq!(line, " INFO shiftdesk_core::transform: transform complete");
        assert!(writer.take_line().is_none());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_console_subscriber_installs_once() {
        init();
        assert!(!init());
    }
}
