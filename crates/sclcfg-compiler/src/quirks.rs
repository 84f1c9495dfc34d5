//! Device quirk table: per-device extra interface commands.

use once_cell::sync::Lazy;

use crate::commands::SPEED_NONEGOTIATE_CMD;

/// One quirk: extra command lines for a (manufacturer, type) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuirkEntry {
    pub manufacturer: String,
    pub ied_type: String,
    /// Fully rendered command lines, inserted after `load-interval`.
    pub lines: Vec<String>,
}

/// Open lookup table mapping device identity to extra interface commands.
///
/// New device models get an entry here; the interface builder never special
/// cases a manufacturer itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuirkTable {
    entries: Vec<QuirkEntry>,
}

static BUILTIN: Lazy<QuirkTable> = Lazy::new(|| {
    // These SEL relays autonegotiate unreliably on IE-9320 fibre ports.
    let nonegotiate = |ied_type: &str| QuirkEntry {
        manufacturer: "SEL".to_string(),
        ied_type: ied_type.to_string(),
        lines: vec![SPEED_NONEGOTIATE_CMD.to_string()],
    };
    QuirkTable {
        entries: vec![nonegotiate("SEL_411L_2S"), nonegotiate("SEL_487E_5S")],
    }
});

impl QuirkTable {
    /// The built-in table.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// An empty table (no device gets extra commands).
    pub fn empty() -> Self {
        QuirkTable {
            entries: Vec::new(),
        }
    }

    /// Adds an entry, builder style.
    pub fn with_entry(mut self, entry: QuirkEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Extra command lines for a device, if any. First match wins.
    pub fn lookup(&self, manufacturer: &str, ied_type: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.manufacturer == manufacturer && e.ied_type == ied_type)
            .map(|e| e.lines.as_slice())
    }
}

impl Default for QuirkTable {
    fn default() -> Self {
        QuirkTable::builtin()
    }
}
