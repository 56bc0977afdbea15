//! Removal of color codes from already rendered text.
//!
//! Only SGR sequences (`ESC [ <params> m`) are removed. Every other byte,
//! including C0 controls and non-SGR escape sequences such as OSC 8
//! hyperlinks or `ESC[2K`, is kept verbatim.

use vte::{Params, Parser, Perform};

/// Copies input through, dropping SGR sequences.
///
/// Bytes are fed to the parser one at a time; `raw` holds the bytes of the
/// sequence in progress so non-SGR sequences can be written back unchanged.
struct SgrFilter {
    out: Vec<u8>,
    raw: Vec<u8>,
}

impl SgrFilter {
    fn flush_raw(&mut self) {
        self.out.append(&mut self.raw);
    }
}

impl Perform for SgrFilter {
    fn print(&mut self, c: char) {
        self.raw.clear();
        let mut utf8 = [0u8; 4];
        self.out.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
    }

    fn execute(&mut self, byte: u8) {
        // C0 controls may arrive inside a sequence; only the control itself is emitted
        self.raw.pop();
        self.out.push(byte);
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _action: char) {
        self.flush_raw();
    }

    fn put(&mut self, _byte: u8) {
        self.flush_raw();
    }

    fn unhook(&mut self) {
        self.flush_raw();
    }

    fn osc_dispatch(&mut self, _params: &[&[u8]], _bell_terminated: bool) {
        self.flush_raw();
    }

    fn csi_dispatch(
        &mut self,
        _params: &Params,
        intermediates: &[u8],
        ignore: bool,
        action: char,
    ) {
        if action == 'm' && intermediates.is_empty() && !ignore {
            self.raw.clear();
        } else {
            self.flush_raw();
        }
    }

    fn esc_dispatch(&mut self, _intermediates: &[u8], _ignore: bool, _byte: u8) {
        self.flush_raw();
    }
}

/// Strip SGR color sequences from `text`, keeping everything else.
pub fn strip_codes(text: &str) -> String {
    if !text.contains('\x1b') {
        return text.to_string();
    }

    let mut filter = SgrFilter {
        out: Vec::with_capacity(text.len()),
        raw: Vec::new(),
    };
    let mut parser = Parser::new();
    for &byte in text.as_bytes() {
        filter.raw.push(byte);
        parser.advance(&mut filter, &[byte]);
    }
    // Unterminated sequence at the end of the input
    filter.flush_raw();

    String::from_utf8_lossy(&filter.out).into_owned()
}
