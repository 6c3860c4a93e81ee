use judge_plan_entities::prelude::*;

use super::{ClassifiedUnit, PrintableUnit, UnitClassifier};


/// Groups sorted tables two at a time. A leftover last table forms a single unit.
pub fn pair_tables<'a>(tables: &[&'a JudgingTable]) -> Vec<PrintableUnit<'a>> {
    tables.chunks(2).filter_map(|chunk| match *chunk {
        [first, second] => Some(PrintableUnit::Double { first, second }),
        [table] => Some(PrintableUnit::Single { table }),
        _ => None,
    }).collect()
}

pub fn classify_units<'a>(units: Vec<PrintableUnit<'a>>, classifier: &dyn UnitClassifier) -> Vec<ClassifiedUnit<'a>> {
    units.into_iter().map(|unit| ClassifiedUnit { class: classifier.classify(&unit), unit }).collect()
}
