// File: crates/plot-core/src/legend.rs
// Summary: Legend entries (handle style + label) in draw order, optionally reversed.

use crate::style::SeriesStyle;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub style: SeriesStyle,
}

/// Boxed legend anchored at axes point (1.0, 0.5), left-center.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn new(entries: Vec<LegendEntry>) -> Self {
        Self { entries }
    }

    /// Reverse handles and labels together.
    pub fn reverse(&mut self) {
        self.entries.reverse();
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
