//! Sprite-sheet status table.

/// One animation of a sprite sheet, selected by a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEntry {
    /// Status code. The sign carries facing: negative codes render the same
    /// row mirrored.
    pub code: i32,
    /// Sheet row holding this animation.
    pub row: usize,
    /// Number of frames in the row. Always at least 1.
    pub frames: usize,
}

/// Status-code → (row, frame count) lookup for a sprite sheet.
///
/// The table must be exhaustive over every status the state machine can
/// produce, mirrored codes included; the first entry doubles as the fallback
/// so frame lookups stay total.
#[derive(Debug, Clone)]
pub struct StatusTable {
    entries: Vec<StatusEntry>,
}

impl StatusTable {
    pub fn new(entries: &[StatusEntry]) -> Self {
        debug_assert!(!entries.is_empty());
        debug_assert!(entries.iter().all(|e| e.frames > 0));
        Self {
            entries: entries.to_vec(),
        }
    }

    /// Exact lookup by status code.
    pub fn lookup(&self, code: i32) -> Option<StatusEntry> {
        self.entries.iter().copied().find(|e| e.code == code)
    }

    /// Lookup that falls back to the first entry for unknown codes.
    pub fn get(&self, code: i32) -> StatusEntry {
        self.lookup(code).unwrap_or(self.entries[0])
    }

    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }
}
