//=========================================================================
// Inventory
//=========================================================================
//
// Ordered icon/name entries carried by the player.
//
// Entries have no identity beyond their position; duplicates are allowed
// (two frag grenades are two entries).
//
//=========================================================================

//=== InventoryEntry ======================================================

/// One carried item: an icon glyph and a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryEntry {
    icon: String,
    name: String,
}

impl InventoryEntry {
    /// Creates an inventory entry from an icon glyph and a name.
    pub fn new(icon: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            name: name.into(),
        }
    }

    /// Icon glyph shown before the name.
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Item display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

//=== Inventory ===========================================================

/// Ordered sequence of [`InventoryEntry`]s.
///
/// Populated only through the snapshot builder; read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    entries: Vec<InventoryEntry>,
}

impl Inventory {
    pub(crate) fn push(&mut self, entry: InventoryEntry) {
        self.entries.push(entry);
    }

    /// Returns the entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &InventoryEntry> {
        self.entries.iter()
    }

    /// Returns the entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&InventoryEntry> {
        self.entries.get(index)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//=== Tests ===============================================================
