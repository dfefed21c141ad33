//=========================================================================
// Mission Brief
//=========================================================================
//
// Single text block describing the current objective.
//
//=========================================================================

//=== MissionBrief ========================================================

/// Objective text for the current scene.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissionBrief {
    text: String,
}

impl MissionBrief {
    /// Creates a mission brief from objective text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Objective text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if no objective text was set.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

//=== Tests ===============================================================
