use std::collections::BTreeMap;

use itertools::Itertools;
use judge_plan_entities::prelude::*;
use serde::{Deserialize, Serialize};



#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictOccurrence {
    pub table_id: Uuid,
    pub table_name: String,
    pub role: JudgeRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictingJudge {
    pub name: String,
    pub occurrences: Vec<ConflictOccurrence>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictsView {
    pub has_conflicts: bool,
    pub regular_conflicts: Vec<ConflictingJudge>,
    pub finale_conflicts: Vec<ConflictingJudge>,
}

impl ConflictsView {
    /// Collects the assignments flagged by the last run of
    /// [`detect_conflicts`](crate::conflicts::detect_conflicts).
    pub fn from_competition(competition: &Competition) -> Self {
        let mut occurrences: BTreeMap<(ComparabilityGroup, &str), Vec<ConflictOccurrence>> = BTreeMap::new();
        let mut tables = competition.tables.iter().collect_vec();
        tables.sort_by_cached_key(|t| t.name.to_lowercase());

        for table in tables {
            let group = table.group();
            for (role, assignment) in table.assignments.iter() {
                if assignment.conflict {
                    occurrences.entry((group, assignment.name.as_str())).or_default().push(
                        ConflictOccurrence {
                            table_id: table.uuid,
                            table_name: table.name.clone(),
                            role: *role,
                        }
                    );
                }
            }
        }

        let mut regular_conflicts = vec![];
        let mut finale_conflicts = vec![];
        for ((group, name), occurrences) in occurrences.into_iter() {
            let judge = ConflictingJudge { name: name.to_string(), occurrences };
            match group {
                ComparabilityGroup::Regular => regular_conflicts.push(judge),
                ComparabilityGroup::Finale => finale_conflicts.push(judge),
            }
        }
        regular_conflicts.sort_by_cached_key(|j| j.name.to_lowercase());
        finale_conflicts.sort_by_cached_key(|j| j.name.to_lowercase());

        ConflictsView {
            has_conflicts: !regular_conflicts.is_empty() || !finale_conflicts.is_empty(),
            regular_conflicts,
            finale_conflicts,
        }
    }

    pub fn num_conflicting_judges(&self) -> usize {
        self.regular_conflicts.len() + self.finale_conflicts.len()
    }
}


#[cfg(test)]
mod test {
    use tracing_test::traced_test;

    use crate::conflicts::detect_conflicts;

    use super::*;

    fn make_table(id: u128, name: &str, is_finale: bool, judges: Vec<(JudgeRole, &str)>) -> JudgingTable {
        let mut table = JudgingTable::new(Uuid::from_u128(id), name, TableKind::StraightLine);
        table.is_finale = is_finale;
        for (role, judge) in judges {
            table.assignments.insert(role, Assignment::new(judge));
        }
        table
    }

    #[test]
    fn test_view_lists_occurrences_per_group() {
        let mut competition = Competition::new("Test");
        competition.tables.push(make_table(2, "b-Table", false, vec![(JudgeRole::ScoreJudge1, "Zoe")]));
        competition.tables.push(make_table(1, "A-Table", false, vec![(JudgeRole::HeadJudge, "Zoe"), (JudgeRole::ScoreJudge2, "anton")]));
        competition.tables.push(make_table(3, "C-Table", false, vec![(JudgeRole::HeadJudge, "anton")]));
        competition.tables.push(make_table(4, "Finale", true, vec![(JudgeRole::HeadJudge, "Zoe"), (JudgeRole::ScoreJudge1, "Zoe")]));

        detect_conflicts(&mut competition);
        let view = ConflictsView::from_competition(&competition);

        assert!(view.has_conflicts);
        assert_eq!(view.regular_conflicts.iter().map(|j| j.name.as_str()).collect_vec(), vec!["anton", "Zoe"]);
        assert_eq!(
            view.regular_conflicts[1].occurrences.iter().map(|o| o.table_name.as_str()).collect_vec(),
            vec!["A-Table", "b-Table"]
        );
        assert_eq!(view.finale_conflicts.len(), 1);
        assert_eq!(view.finale_conflicts[0].occurrences.iter().map(|o| o.role).collect_vec(), vec![JudgeRole::HeadJudge, JudgeRole::ScoreJudge1]);
        assert_eq!(view.num_conflicting_judges(), 3);
    }

    #[test]
    fn test_view_without_conflicts() {
        let mut competition = Competition::new("Test");
        competition.tables.push(make_table(1, "A", false, vec![(JudgeRole::HeadJudge, "Zoe")]));
        competition.tables.push(make_table(2, "B", true, vec![(JudgeRole::HeadJudge, "Zoe")]));

        detect_conflicts(&mut competition);
        let view = ConflictsView::from_competition(&competition);
        assert!(!view.has_conflicts);
        assert_eq!(view.num_conflicting_judges(), 0);
    }

    #[test]
    fn test_view_reads_annotated_flags() {
        let mut competition = Competition::new("Test");
        competition.tables.push(make_table(1, "A", false, vec![(JudgeRole::HeadJudge, "Zoe")]));
        competition.tables.push(make_table(2, "B", false, vec![(JudgeRole::HeadJudge, "Zoe")]));

        assert!(!ConflictsView::from_competition(&competition).has_conflicts);

        detect_conflicts(&mut competition);
        let view = ConflictsView::from_competition(&competition);
        assert_eq!(view.regular_conflicts.len(), 1);
        assert_eq!(view.regular_conflicts[0].occurrences.len(), 2);
    }

    #[test]
    #[traced_test]
    fn test_ignored_role_is_reported_once() {
        let mut competition = Competition::new("Test");
        let mut table = make_table(1, "A", false, vec![(JudgeRole::HeadJudge, "Zoe")]);
        table.assignments.insert(JudgeRole::ArtistryJudge2, Assignment::new("Zoe"));
        competition.tables.push(table);

        detect_conflicts(&mut competition);
        let view = ConflictsView::from_competition(&competition);

        assert!(!view.has_conflicts);
        logs_assert(|lines: &[&str]| {
            match lines.iter().filter(|line| line.contains("Ignoring role AIK2")).count() {
                1 => Ok(()),
                n => Err(format!("expected one warning, got {}", n)),
            }
        });
    }
}
