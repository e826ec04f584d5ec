use crate::comparison::engine::Direction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which of the two selected years a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn letter(&self) -> char {
        match self {
            Side::A => 'A',
            Side::B => 'B',
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Identifier of the cell showing `metric` for `side`, e.g. `yearAMinWage`.
pub fn value_cell_id(side: Side, metric: &str) -> String {
    format!("year{}{}", side.letter(), metric)
}

/// Identifier of the cell showing the comparison for `metric`, e.g. `compareMinWage`.
pub fn compare_cell_id(metric: &str) -> String {
    format!("compare{metric}")
}

/// Styling applied to a comparison cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellClass {
    #[default]
    Plain,
    Increase,
    Decrease,
}

impl CellClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellClass::Plain => "",
            CellClass::Increase => "increase",
            CellClass::Decrease => "decrease",
        }
    }
}

impl From<Option<Direction>> for CellClass {
    fn from(direction: Option<Direction>) -> Self {
        match direction {
            Some(Direction::Increase) => CellClass::Increase,
            Some(Direction::Decrease) => CellClass::Decrease,
            Some(Direction::Neutral) | None => CellClass::Plain,
        }
    }
}

/// Where rendered values end up.
///
/// Cells are addressed only by their identifier string; how they are laid
/// out is up to the implementation.
pub trait PresentationSink {
    fn set_cell_text(&mut self, id: &str, text: &str);
    fn set_cell_class(&mut self, id: &str, class: CellClass);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    pub class: CellClass,
}

/// In-memory sink keyed by cell identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableSink {
    cells: BTreeMap<String, Cell>,
}

impl TableSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.cells.get(id).map(|c| c.text.as_str())
    }

    pub fn class(&self, id: &str) -> CellClass {
        self.cells.get(id).map(|c| c.class).unwrap_or_default()
    }

    pub fn cells(&self) -> &BTreeMap<String, Cell> {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl PresentationSink for TableSink {
    fn set_cell_text(&mut self, id: &str, text: &str) {
        self.cells.entry(id.to_string()).or_default().text = text.to_string();
    }

    fn set_cell_class(&mut self, id: &str, class: CellClass) {
        self.cells.entry(id.to_string()).or_default().class = class;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_ids() {
        assert_eq!(value_cell_id(Side::A, "MinWage"), "yearAMinWage");
        assert_eq!(
            value_cell_id(Side::B, "MedianIncomeHoursForAverageHome"),
            "yearBMedianIncomeHoursForAverageHome"
        );
        assert_eq!(compare_cell_id("PublicTuition"), "comparePublicTuition");
    }

    #[test]
    fn test_class_from_direction() {
        assert_eq!(CellClass::from(Some(Direction::Increase)), CellClass::Increase);
        assert_eq!(CellClass::from(Some(Direction::Decrease)), CellClass::Decrease);
        assert_eq!(CellClass::from(Some(Direction::Neutral)), CellClass::Plain);
        assert_eq!(CellClass::from(None), CellClass::Plain);
    }

    #[test]
    fn test_table_sink_overwrites() {
        let mut sink = TableSink::new();
        sink.set_cell_text("compareMinWage", "No Data");
        sink.set_cell_class("compareMinWage", CellClass::Decrease);
        sink.set_cell_text("compareMinWage", "+$1.00 (+10.0%)");
        sink.set_cell_class("compareMinWage", CellClass::Plain);

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.text("compareMinWage"), Some("+$1.00 (+10.0%)"));
        assert_eq!(sink.class("compareMinWage"), CellClass::Plain);
        assert_eq!(sink.text("yearAMinWage"), None);
    }
}
