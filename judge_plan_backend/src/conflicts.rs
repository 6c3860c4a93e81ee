use std::collections::HashMap;

use judge_plan_entities::prelude::*;


/// Number of times each judge name occurs per comparability group.
#[derive(Debug, Clone, Default)]
pub struct ConflictMap {
    name_counts: HashMap<ComparabilityGroup, HashMap<String, usize>>,
}

impl ConflictMap {
    pub fn new() -> Self {
        ConflictMap {
            name_counts: HashMap::new(),
        }
    }

    pub fn new_for_competition(competition: &Competition) -> Self {
        let mut conflict_map = ConflictMap::new();

        for table in competition.tables.iter() {
            let group = table.group();
            for (role, assignment) in table.assignments.iter() {
                if !role.is_valid_for(table.kind) {
                    tracing::warn!("Ignoring role {} in table {} of kind {}", role, table.uuid, table.kind);
                    continue;
                }
                conflict_map.add_name(group, &assignment.name);
            }
        }

        conflict_map
    }

    pub fn add_name(&mut self, group: ComparabilityGroup, name: &str) {
        if name.is_empty() {
            return;
        }
        *self.name_counts.entry(group).or_default().entry(name.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, group: ComparabilityGroup, name: &str) -> usize {
        self.name_counts.get(&group).and_then(|counts| counts.get(name)).copied().unwrap_or(0)
    }

    pub fn is_conflict(&self, group: ComparabilityGroup, name: &str) -> bool {
        !name.is_empty() && self.count(group, name) >= 2
    }
}

/// Recomputes the conflict flag of every assignment and returns whether any
/// judge is assigned twice within a group.
pub fn detect_conflicts(competition: &mut Competition) -> bool {
    let conflict_map = ConflictMap::new_for_competition(competition);
    let mut num_conflicts = 0;

    for table in competition.tables.iter_mut() {
        let group = table.group();
        let kind = table.kind;
        for (role, assignment) in table.assignments.iter_mut() {
            assignment.conflict = role.is_valid_for(kind) && conflict_map.is_conflict(group, &assignment.name);
            if assignment.conflict {
                num_conflicts += 1;
            }
        }
    }

    tracing::debug!("Found {} conflicting assignments in {} tables", num_conflicts, competition.tables.len());
    num_conflicts > 0
}

pub fn annotated(competition: &Competition) -> Competition {
    let mut competition = competition.clone();
    detect_conflicts(&mut competition);
    competition
}
