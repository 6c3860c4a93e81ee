use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use judge_plan_backend::{detect_conflicts, views::ConflictsView};
use judge_plan_entities::mock::{make_mock_competition_with_options, MockOption};
use judge_plan_entities::prelude::*;
use judge_plan_entities::snapshot::{read_competition, write_competition};
use judge_plan_reports::layout_for_print;

use crate::config::OutputFormat;
use crate::output;


/// Exit status of `conflicts` when at least one double assignment was found.
pub const CONFLICTS_FOUND_EXIT_CODE: u8 = 2;

#[derive(clap::Subcommand)]
pub enum Command {
    /// List judges assigned more than once within the regular or finale tables
    Conflicts {
        path: PathBuf
    },
    /// Print the page layout of all tables
    Layout {
        path: PathBuf
    },
    /// Recompute the conflict flags stored in a save file
    Annotate {
        path: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a generated competition to stdout
    Mock {
        #[arg(long, default_value_t = 6)]
        tables: u32,
        #[arg(long, default_value_t = 2)]
        finale_tables: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 30)]
        judges: u32,
        #[arg(long)]
        random_names: bool,
    },
}

fn load_competition(path: &Path) -> anyhow::Result<Competition> {
    let file = File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
    let mut competition = read_competition(BufReader::new(file)).with_context(|| format!("Could not read {}", path.display()))?;
    detect_conflicts(&mut competition);
    Ok(competition)
}

impl Command {
    /// Runs the command, writing its result to `out`. Returns the process exit code.
    pub fn run(&self, format: OutputFormat, out: &mut dyn Write) -> anyhow::Result<u8> {
        match self {
            Command::Conflicts { path } => {
                let competition = load_competition(path)?;
                let view = ConflictsView::from_competition(&competition);
                tracing::info!("Found {} judges with conflicting assignments", view.num_conflicting_judges());
                out.write_all(output::format_conflicts(&view, format)?.as_bytes())?;

                if view.has_conflicts {
                    Ok(CONFLICTS_FOUND_EXIT_CODE)
                }
                else {
                    Ok(0)
                }
            },
            Command::Layout { path } => {
                let competition = load_competition(path)?;
                let layout = layout_for_print(&competition);
                out.write_all(output::format_layout(&layout, format)?.as_bytes())?;
                Ok(0)
            },
            Command::Annotate { path, output } => {
                let competition = load_competition(path)?;
                match output {
                    Some(output_path) => {
                        let file = File::create(output_path).with_context(|| format!("Could not create {}", output_path.display()))?;
                        let mut writer = BufWriter::new(file);
                        write_competition(&mut writer, &competition)?;
                        writer.flush()?;
                    },
                    None => {
                        write_competition(&mut *out, &competition)?;
                        out.write_all(b"\n")?;
                    }
                }
                if competition.has_conflicts() {
                    tracing::warn!("{} still contains conflicting assignments", path.display());
                }
                Ok(0)
            },
            Command::Mock { tables, finale_tables, seed, judges, random_names } => {
                let mut competition = make_mock_competition_with_options(MockOption {
                    num_regular_tables: *tables,
                    num_finale_tables: *finale_tables,
                    num_judges: *judges,
                    use_random_names: *random_names,
                    seed: *seed,
                    ..Default::default()
                });
                detect_conflicts(&mut competition);
                write_competition(&mut *out, &competition)?;
                out.write_all(b"\n")?;
                Ok(0)
            },
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn run_to_string(command: Command, format: OutputFormat) -> anyhow::Result<(u8, String)> {
        let mut out = vec![];
        let code = command.run(format, &mut out)?;
        Ok((code, String::from_utf8(out)?))
    }

    #[test]
    fn test_mock_output_is_readable_snapshot() -> anyhow::Result<()> {
        let (code, text) = run_to_string(Command::Mock { tables: 3, finale_tables: 1, seed: 4, judges: 5, random_names: false }, OutputFormat::Text)?;
        assert_eq!(code, 0);

        let competition = judge_plan_entities::snapshot::competition_from_str(&text)?;
        assert_eq!(competition.regular_tables().count(), 3);
        assert_eq!(competition.finale_tables().count(), 1);
        Ok(())
    }

    #[test]
    fn test_conflicts_exit_code() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("judge_plan_cli_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir)?;
        let path = dir.join("conflicts.json");

        let mut competition = Competition::default();
        let mut a = JudgingTable::new(Uuid::from_u128(1), "A", TableKind::Spiral);
        a.assign(JudgeRole::HeadJudge, "Anna")?;
        let mut b = JudgingTable::new(Uuid::from_u128(2), "B", TableKind::Vault);
        b.assign(JudgeRole::HeadJudge, "Anna")?;
        competition.tables.push(a);
        competition.tables.push(b);
        write_competition(File::create(&path)?, &competition)?;

        let (code, text) = run_to_string(Command::Conflicts { path: path.clone() }, OutputFormat::Text)?;
        assert_eq!(code, CONFLICTS_FOUND_EXIT_CODE);
        assert!(text.contains("Anna"));

        competition.tables[1].assign(JudgeRole::HeadJudge, "Bert")?;
        write_competition(File::create(&path)?, &competition)?;
        let (code, _) = run_to_string(Command::Conflicts { path: path.clone() }, OutputFormat::Text)?;
        assert_eq!(code, 0);

        std::fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = run_to_string(Command::Layout { path: PathBuf::from("/nonexistent/judge_plan.json") }, OutputFormat::Text);
        assert!(result.is_err());
    }
}
