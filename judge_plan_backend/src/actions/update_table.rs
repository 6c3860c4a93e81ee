use judge_plan_entities::prelude::*;
use serde::{Serialize, Deserialize};

use super::{base::table_mut, ActionError, ActionTrait};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTableAction {
    pub name: String,
    pub kind: TableKind,
    #[serde(default)]
    pub uuid: Option<Uuid>,
}

impl ActionTrait for CreateTableAction {
    fn apply(self, competition: &mut Competition) -> Result<(), ActionError> {
        let uuid = self.uuid.unwrap_or_else(Uuid::new_v4);
        competition.add_table(JudgingTable::new(uuid, self.name, self.kind))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTableAction {
    pub table_id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: Option<TableKind>,
    #[serde(default)]
    pub is_finale: Option<bool>,
}

impl ActionTrait for UpdateTableAction {
    fn apply(self, competition: &mut Competition) -> Result<(), ActionError> {
        let table = table_mut(competition, self.table_id)?;

        if let Some(name) = self.name {
            table.name = name;
        }
        if let Some(kind) = self.kind {
            let dropped = table.set_kind(kind);
            if !dropped.is_empty() {
                tracing::debug!("Dropped {} assignments from table {} after changing kind to {}", dropped.len(), table.uuid, kind);
            }
        }
        if let Some(is_finale) = self.is_finale {
            table.is_finale = is_finale;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTableAction {
    pub table_id: Uuid,
}

impl ActionTrait for DeleteTableAction {
    fn apply(self, competition: &mut Competition) -> Result<(), ActionError> {
        competition.remove_table(self.table_id).map_err(|_| ActionError::TableNotFound(self.table_id))?;
        Ok(())
    }
}
