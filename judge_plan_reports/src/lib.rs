pub mod layout;

pub use layout::{layout_for_print, layout_for_print_with, PrintLayout, PrintInstruction, PrintableUnit, UnitClass, ClassifiedUnit};
