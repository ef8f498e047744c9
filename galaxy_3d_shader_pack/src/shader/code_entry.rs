//! Code blob and entry point for one representation

/// Shader code (source text or bytecode) plus its entry point name
///
/// An entry with empty `code` is what lookups return for a missing key, so
/// callers treat empty code as "not present".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CodeEntry {
    code: Vec<u8>,
    entry_point: Vec<u8>,
}

impl CodeEntry {
    pub fn new(code: impl Into<Vec<u8>>, entry_point: impl Into<Vec<u8>>) -> Self {
        Self {
            code: code.into(),
            entry_point: entry_point.into(),
        }
    }

    pub fn code(&self) -> &[u8] {
        &self.code
    }

    pub fn set_code(&mut self, code: impl Into<Vec<u8>>) {
        self.code = code.into();
    }

    pub fn entry_point(&self) -> &[u8] {
        &self.entry_point
    }

    pub fn set_entry_point(&mut self, entry_point: impl Into<Vec<u8>>) {
        self.entry_point = entry_point.into();
    }

    /// True when no code is held (missing-key result)
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Entry point as UTF-8, if it is valid UTF-8
    pub fn entry_point_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.entry_point).ok()
    }
}
