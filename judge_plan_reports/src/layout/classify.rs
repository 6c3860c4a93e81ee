use judge_plan_entities::prelude::*;

use super::{PrintableUnit, UnitClass};


/// Units taller than this many rows use the large music layout.
pub const MUSIC_ROW_THRESHOLD: usize = 12;

/// Title row and column header row printed above the role rows of a table.
pub const HEADER_ROWS_PER_TABLE: usize = 2;

/// Decides which size class a printable unit belongs to. This is normally
/// answered by whatever renders the tables.
pub trait UnitClassifier {
    fn classify(&self, unit: &PrintableUnit<'_>) -> UnitClass;
}

impl<F> UnitClassifier for F where F: Fn(&PrintableUnit<'_>) -> UnitClass {
    fn classify(&self, unit: &PrintableUnit<'_>) -> UnitClass {
        self(unit)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RowCountClassifier;

impl RowCountClassifier {
    pub fn rows_for_table(table: &JudgingTable) -> usize {
        HEADER_ROWS_PER_TABLE + JudgeRole::roles_for_kind(table.kind).len()
    }

    /// Tables of a double unit are printed side by side.
    pub fn rows_for_unit(unit: &PrintableUnit<'_>) -> usize {
        unit.tables().into_iter().map(Self::rows_for_table).max().unwrap_or(0)
    }
}

impl UnitClassifier for RowCountClassifier {
    fn classify(&self, unit: &PrintableUnit<'_>) -> UnitClass {
        if Self::rows_for_unit(unit) > MUSIC_ROW_THRESHOLD {
            UnitClass::Music
        }
        else {
            UnitClass::Regular
        }
    }
}
