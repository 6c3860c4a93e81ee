use serde::{Serialize, Deserialize};
use uuid::Uuid;

use super::{judging_table::JudgingTable, EntityError};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Competition {
    pub name: String,
    pub date: String,
    pub place: String,
    pub responsible_person: String,
    pub judges_meeting_time: String,
    pub replacement_judges: Vec<String>,
    /// No particular order. Printing order is computed by the layout.
    pub tables: Vec<JudgingTable>,
}

impl Competition {
    pub fn new(name: impl Into<String>) -> Self {
        Competition {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add_table(&mut self, table: JudgingTable) -> Result<(), EntityError> {
        if self.table(table.uuid).is_some() {
            return Err(EntityError::DuplicateTable(table.uuid));
        }
        self.tables.push(table);
        Ok(())
    }

    pub fn remove_table(&mut self, uuid: Uuid) -> Result<JudgingTable, EntityError> {
        let idx = self.tables.iter().position(|t| t.uuid == uuid).ok_or(EntityError::TableDoesNotExist(uuid))?;
        Ok(self.tables.remove(idx))
    }

    pub fn table(&self, uuid: Uuid) -> Option<&JudgingTable> {
        self.tables.iter().find(|t| t.uuid == uuid)
    }

    pub fn table_mut(&mut self, uuid: Uuid) -> Option<&mut JudgingTable> {
        self.tables.iter_mut().find(|t| t.uuid == uuid)
    }

    pub fn has_conflicts(&self) -> bool {
        self.tables.iter().any(|t| t.has_conflicts())
    }

    pub fn regular_tables(&self) -> impl Iterator<Item = &JudgingTable> {
        self.tables.iter().filter(|t| !t.is_finale)
    }

    pub fn finale_tables(&self) -> impl Iterator<Item = &JudgingTable> {
        self.tables.iter().filter(|t| t.is_finale)
    }
}
