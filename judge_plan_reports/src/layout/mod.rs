use judge_plan_entities::prelude::*;
use serde::Serialize;

pub mod sort;
pub mod pairing;
pub mod classify;
pub mod packing;

pub use classify::{UnitClassifier, RowCountClassifier, MUSIC_ROW_THRESHOLD};

use itertools::Itertools;


/// One or two tables printed as a single block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum PrintableUnit<'a> {
    Single { table: &'a JudgingTable },
    Double { first: &'a JudgingTable, second: &'a JudgingTable },
}

impl<'a> PrintableUnit<'a> {
    pub fn tables(&self) -> Vec<&'a JudgingTable> {
        match self {
            PrintableUnit::Single { table } => vec![*table],
            PrintableUnit::Double { first, second } => vec![*first, *second],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnitClass {
    Music,
    Regular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassifiedUnit<'a> {
    pub unit: PrintableUnit<'a>,
    pub class: UnitClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum PrintInstruction<'a> {
    PlaceUnit { unit: ClassifiedUnit<'a> },
    PageBreak,
}

impl<'a> PrintInstruction<'a> {
    pub fn is_page_break(&self) -> bool {
        matches!(self, PrintInstruction::PageBreak)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintLayout<'a> {
    pub instructions: Vec<PrintInstruction<'a>>,
}

impl<'a> PrintLayout<'a> {
    /// Units grouped by the page they end up on. A break directly at the start
    /// of the stream yields an empty first page, as the renderer would print it.
    pub fn pages(&self) -> Vec<Vec<ClassifiedUnit<'a>>> {
        if self.instructions.is_empty() {
            return vec![];
        }

        let mut pages = vec![vec![]];
        for instruction in self.instructions.iter() {
            match instruction {
                PrintInstruction::PlaceUnit { unit } => {
                    if let Some(page) = pages.last_mut() {
                        page.push(*unit);
                    }
                },
                PrintInstruction::PageBreak => pages.push(vec![]),
            }
        }
        pages
    }

    pub fn page_count(&self) -> usize {
        if self.instructions.is_empty() {
            0
        }
        else {
            1 + self.instructions.iter().filter(|i| i.is_page_break()).count()
        }
    }

    pub fn tables_in_print_order(&self) -> Vec<&'a JudgingTable> {
        self.instructions.iter().filter_map(|i| match i {
            PrintInstruction::PlaceUnit { unit } => Some(unit.unit.tables()),
            PrintInstruction::PageBreak => None,
        }).flatten().collect_vec()
    }
}

pub fn layout_for_print(competition: &Competition) -> PrintLayout<'_> {
    layout_for_print_with(competition, &RowCountClassifier)
}

/// Sorts, pairs and packs the tables of a competition. Finale tables are
/// laid out after all other tables, starting on a fresh page.
pub fn layout_for_print_with<'a>(competition: &'a Competition, classifier: &dyn UnitClassifier) -> PrintLayout<'a> {
    let sorted = sort::sort_tables(competition);

    let regular_units = pairing::classify_units(pairing::pair_tables(&sorted.regular), classifier);
    let finale_units = pairing::classify_units(pairing::pair_tables(&sorted.finale), classifier);

    let instructions = packing::pack_sequences(regular_units, finale_units);

    let layout = PrintLayout { instructions };
    tracing::debug!("Laid out {} tables on {} pages", competition.tables.len(), layout.page_count());
    layout
}
