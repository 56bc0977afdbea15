//! Shared helpers for integration tests

use std::sync::Mutex;

use tint::render::join_operands_spaced;
use tint::{Operand, Renderer};

/// Renderer double that records the code of every call.
#[derive(Default)]
pub struct RecordingRenderer {
    calls: Mutex<Vec<String>>,
}

impl RecordingRenderer {
    pub fn codes(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render_code(&self, code: &str, args: &[&dyn Operand]) -> String {
        self.calls.lock().unwrap().push(code.to_string());
        format!("[{}]{}", code, join_operands_spaced(args))
    }

    fn render_string(&self, code: &str, text: &str) -> String {
        self.calls.lock().unwrap().push(code.to_string());
        format!("[{}]{}", code, text)
    }
}

/// Make escape bytes visible so rendered output can be snapshotted.
pub fn visible(rendered: &str) -> String {
    rendered.replace('\x1b', "\\e")
}

/// Writer whose reader has gone away; every call fails with `BrokenPipe`.
pub struct FailingWriter;

impl std::io::Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "reader closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "reader closed"))
    }
}
