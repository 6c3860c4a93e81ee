use itertools::Itertools;
use judge_plan_backend::views::{conflicts_view::ConflictingJudge, ConflictsView};
use judge_plan_reports::{PrintInstruction, PrintLayout, PrintableUnit, UnitClass};

use crate::config::OutputFormat;


fn unit_label(unit: &PrintableUnit<'_>) -> String {
    unit.tables().iter().map(|t| t.name.as_str()).join(" | ")
}

fn class_label(class: UnitClass) -> &'static str {
    match class {
        UnitClass::Music => "music",
        UnitClass::Regular => "regular",
    }
}

pub fn format_layout_text(layout: &PrintLayout<'_>) -> String {
    let mut out = String::new();
    for instruction in layout.instructions.iter() {
        match instruction {
            PrintInstruction::PlaceUnit { unit } => {
                out.push_str(&format!("place [{}] {}\n", class_label(unit.class), unit_label(&unit.unit)));
            },
            PrintInstruction::PageBreak => out.push_str("page break\n"),
        }
    }
    out.push_str(&format!("{} page(s)\n", layout.page_count()));
    out
}

fn format_judges(out: &mut String, title: &str, judges: &[ConflictingJudge]) {
    if judges.is_empty() {
        return;
    }
    out.push_str(&format!("{}:\n", title));
    for judge in judges {
        let places = judge.occurrences.iter().map(|o| format!("{} ({})", o.table_name, o.role)).join(", ");
        out.push_str(&format!("  {}: {}\n", judge.name, places));
    }
}

pub fn format_conflicts_text(view: &ConflictsView) -> String {
    if !view.has_conflicts {
        return "No conflicts\n".into();
    }

    let mut out = String::new();
    format_judges(&mut out, "Regular tables", &view.regular_conflicts);
    format_judges(&mut out, "Finale tables", &view.finale_conflicts);
    out
}

pub fn format_layout(layout: &PrintLayout<'_>, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(format_layout_text(layout)),
        OutputFormat::Json => serde_json::to_string_pretty(layout).map(|s| s + "\n"),
    }
}

pub fn format_conflicts(view: &ConflictsView, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(format_conflicts_text(view)),
        OutputFormat::Json => serde_json::to_string_pretty(view).map(|s| s + "\n"),
    }
}
