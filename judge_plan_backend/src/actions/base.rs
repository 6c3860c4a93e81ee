use judge_plan_entities::prelude::*;
use thiserror::Error;


#[derive(Error, Debug, PartialEq, Eq)]
pub enum ActionError {
    #[error("Table {0} not found")]
    TableNotFound(Uuid),
    #[error(transparent)]
    Entity(#[from] EntityError),
}

pub trait ActionTrait {
    fn apply(self, competition: &mut Competition) -> Result<(), ActionError>;
}

pub(crate) fn table_mut(competition: &mut Competition, table_id: Uuid) -> Result<&mut JudgingTable, ActionError> {
    competition.table_mut(table_id).ok_or(ActionError::TableNotFound(table_id))
}
