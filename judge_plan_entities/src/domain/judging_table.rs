use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};
use uuid::Uuid;

use super::{role::JudgeRole, table_kind::TableKind, ComparabilityGroup, EntityError};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Assignment {
    pub name: String,
    /// Set by conflict detection, never by the editor.
    #[serde(default)]
    pub conflict: bool,
}

impl Assignment {
    pub fn new(name: impl Into<String>) -> Self {
        Assignment {
            name: name.into(),
            conflict: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgingTable {
    pub uuid: Uuid,
    pub name: String,
    pub kind: TableKind,
    pub is_finale: bool,
    pub assignments: BTreeMap<JudgeRole, Assignment>,
}

impl JudgingTable {
    pub fn new(uuid: Uuid, name: impl Into<String>, kind: TableKind) -> Self {
        JudgingTable {
            uuid,
            name: name.into(),
            kind,
            is_finale: false,
            assignments: BTreeMap::new(),
        }
    }

    pub fn group(&self) -> ComparabilityGroup {
        ComparabilityGroup::from_is_finale(self.is_finale)
    }

    /// Assigns `name` to `role`. An empty name removes the assignment.
    pub fn assign(&mut self, role: JudgeRole, name: impl Into<String>) -> Result<(), EntityError> {
        if !role.is_valid_for(self.kind) {
            return Err(EntityError::RoleNotValidForKind { role, kind: self.kind });
        }

        let name = name.into();
        if name.is_empty() {
            self.assignments.remove(&role);
        }
        else {
            self.assignments.insert(role, Assignment::new(name));
        }
        Ok(())
    }

    pub fn judge_name(&self, role: JudgeRole) -> Option<&str> {
        self.assignments.get(&role).map(|a| a.name.as_str())
    }

    /// Changes the discipline and drops assignments for roles the new kind does not have.
    pub fn set_kind(&mut self, kind: TableKind) -> Vec<(JudgeRole, Assignment)> {
        self.kind = kind;
        let (kept, dropped) = std::mem::take(&mut self.assignments).into_iter().partition::<BTreeMap<_, _>, _>(
            |(role, _)| role.is_valid_for(kind)
        );
        self.assignments = kept;
        dropped.into_iter().collect()
    }

    /// Roles in this table that are not allowed for its kind.
    /// Only reachable through hand-edited data, since `assign` refuses them.
    pub fn out_of_contract_roles(&self) -> Vec<JudgeRole> {
        self.assignments.keys().filter(|r| !r.is_valid_for(self.kind)).copied().collect()
    }

    pub fn has_conflicts(&self) -> bool {
        self.assignments.values().any(|a| a.conflict)
    }
}


#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_assign_and_clear() -> Result<(), EntityError> {
        let mut table = JudgingTable::new(Uuid::from_u128(1), "KG 1", TableKind::Spiral);
        table.assign(JudgeRole::HeadJudge, "Anna")?;
        assert_eq!(table.judge_name(JudgeRole::HeadJudge), Some("Anna"));

        table.assign(JudgeRole::HeadJudge, "")?;
        assert_eq!(table.judge_name(JudgeRole::HeadJudge), None);
        assert!(table.assignments.is_empty());
        Ok(())
    }

    #[test]
    fn test_artistry_role_rejected_for_non_music_table() {
        let mut table = JudgingTable::new(Uuid::from_u128(1), "KG 1", TableKind::Vault);
        let result = table.assign(JudgeRole::ArtistryJudge1, "Anna");
        assert_matches!(result, Err(EntityError::RoleNotValidForKind { role: JudgeRole::ArtistryJudge1, kind: TableKind::Vault }));
    }

    #[test]
    fn test_set_kind_drops_artistry_roles() -> Result<(), EntityError> {
        let mut table = JudgingTable::new(Uuid::from_u128(1), "KG 1", TableKind::StraightLineMusic);
        table.assign(JudgeRole::HeadJudge, "Anna")?;
        table.assign(JudgeRole::ArtistryJudge3, "Bert")?;

        let dropped = table.set_kind(TableKind::StraightLine);

        assert_eq!(dropped, vec![(JudgeRole::ArtistryJudge3, Assignment::new("Bert"))]);
        assert_eq!(table.assignments.len(), 1);
        assert!(table.out_of_contract_roles().is_empty());
        Ok(())
    }
}
