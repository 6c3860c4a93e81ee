//! Reading and writing competition snapshots in the JSON format of saved
//! competition files.

use std::{collections::BTreeMap, io::{Read, Write}};

use serde::{Serialize, Deserialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{competition::Competition, judging_table::{Assignment, JudgingTable}, role::JudgeRole, table_kind::TableKind};


#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Malformed competition data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Table stored under key {key} has id {unique_id}")]
    TableIdMismatch { key: Uuid, unique_id: Uuid },
    #[error("Judge stored under role {key} in table {table} claims role {role}")]
    RoleKeyMismatch { table: Uuid, key: JudgeRole, role: JudgeRole },
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredJudge {
    role: JudgeRole,
    name: String,
    #[serde(rename = "doubleFound", default)]
    double_found: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredTable {
    #[serde(rename = "uniqueID")]
    unique_id: Uuid,
    table_name: String,
    table_kind: TableKind,
    #[serde(default)]
    table_is_finale: bool,
    #[serde(default)]
    judges: BTreeMap<JudgeRole, StoredJudge>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct StoredCompetition {
    #[serde(default)]
    wk_name: String,
    #[serde(default)]
    wk_date: String,
    #[serde(default)]
    wk_place: String,
    #[serde(default)]
    wk_responsible_person: String,
    #[serde(default)]
    wk_judgesmeeting_time: String,
    #[serde(default)]
    wk_replacement_judges: Option<Vec<String>>,
    #[serde(default)]
    wk_judgingtables: Option<BTreeMap<Uuid, StoredTable>>,
}

impl StoredTable {
    fn into_table(self, key: Uuid) -> Result<JudgingTable, SnapshotError> {
        if key != self.unique_id {
            return Err(SnapshotError::TableIdMismatch { key, unique_id: self.unique_id });
        }

        let mut table = JudgingTable::new(self.unique_id, self.table_name, self.table_kind);
        table.is_finale = self.table_is_finale;

        for (role_key, judge) in self.judges.into_iter() {
            if role_key != judge.role {
                return Err(SnapshotError::RoleKeyMismatch { table: table.uuid, key: role_key, role: judge.role });
            }
            if judge.name.is_empty() {
                continue;
            }
            // The editor keeps judges when a table's kind changes, so saved
            // files can contain roles the kind does not have.
            if !judge.role.is_valid_for(table.kind) {
                tracing::warn!("Dropping judge {:?} with role {} from table {} of kind {}", judge.name, judge.role, table.uuid, table.kind);
                continue;
            }
            table.assignments.insert(judge.role, Assignment { name: judge.name, conflict: judge.double_found });
        }

        Ok(table)
    }
}

impl From<&JudgingTable> for StoredTable {
    fn from(table: &JudgingTable) -> Self {
        StoredTable {
            unique_id: table.uuid,
            table_name: table.name.clone(),
            table_kind: table.kind,
            table_is_finale: table.is_finale,
            judges: table.assignments.iter().map(|(role, Assignment { name, conflict })| {
                (*role, StoredJudge { role: *role, name: name.clone(), double_found: *conflict })
            }).collect(),
        }
    }
}

impl TryFrom<StoredCompetition> for Competition {
    type Error = SnapshotError;

    fn try_from(stored: StoredCompetition) -> Result<Self, Self::Error> {
        let tables = stored.wk_judgingtables.unwrap_or_default().into_iter().map(
            |(key, table)| table.into_table(key)
        ).collect::<Result<Vec<_>, _>>()?;

        Ok(Competition {
            name: stored.wk_name,
            date: stored.wk_date,
            place: stored.wk_place,
            responsible_person: stored.wk_responsible_person,
            judges_meeting_time: stored.wk_judgesmeeting_time,
            replacement_judges: stored.wk_replacement_judges.unwrap_or_default(),
            tables,
        })
    }
}

impl From<&Competition> for StoredCompetition {
    fn from(competition: &Competition) -> Self {
        StoredCompetition {
            wk_name: competition.name.clone(),
            wk_date: competition.date.clone(),
            wk_place: competition.place.clone(),
            wk_responsible_person: competition.responsible_person.clone(),
            wk_judgesmeeting_time: competition.judges_meeting_time.clone(),
            wk_replacement_judges: Some(competition.replacement_judges.clone()),
            wk_judgingtables: Some(competition.tables.iter().map(|t| (t.uuid, StoredTable::from(t))).collect()),
        }
    }
}

pub fn read_competition<R>(reader: R) -> Result<Competition, SnapshotError> where R: Read {
    let stored: StoredCompetition = serde_json::from_reader(reader)?;
    let competition = Competition::try_from(stored)?;
    tracing::debug!("Read competition {:?} with {} tables", competition.name, competition.tables.len());
    Ok(competition)
}

pub fn competition_from_str(data: &str) -> Result<Competition, SnapshotError> {
    read_competition(data.as_bytes())
}

pub fn write_competition<W>(writer: W, competition: &Competition) -> Result<(), SnapshotError> where W: Write {
    serde_json::to_writer_pretty(writer, &StoredCompetition::from(competition))?;
    Ok(())
}

pub fn competition_to_string(competition: &Competition) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(&StoredCompetition::from(competition))?)
}
