//=========================================================================
// Scene Status
//=========================================================================
//
// Ordered icon/label lines describing current battlefield conditions.
//
// The sequence is immutable once the snapshot is built and is recreated
// wholesale for each scene. Order is insertion order; duplicates are
// allowed.
//
//=========================================================================

//=== StatusLine ==========================================================

/// One battlefield condition: an icon glyph and a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    icon: String,
    label: String,
}

impl StatusLine {
    /// Creates a status line from an icon glyph and a label.
    pub fn new(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
        }
    }

    /// Icon glyph shown before the label.
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Condition text.
    pub fn label(&self) -> &str {
        &self.label
    }
}

//=== SceneStatus =========================================================

/// Ordered sequence of [`StatusLine`]s.
///
/// Populated only through the snapshot builder; read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneStatus {
    lines: Vec<StatusLine>,
}

impl SceneStatus {
    pub(crate) fn push(&mut self, line: StatusLine) {
        self.lines.push(line);
    }

    /// Returns the lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &StatusLine> {
        self.lines.iter()
    }

    /// Returns the number of status lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if there are no status lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

//=== Tests ===============================================================
