use judge_plan_entities::prelude::*;
use serde::{Serialize, Deserialize};

use super::{base::table_mut, ActionError, ActionTrait};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignJudgeAction {
    pub table_id: Uuid,
    pub role: JudgeRole,
    /// An empty name clears the role.
    pub name: String,
}

impl ActionTrait for AssignJudgeAction {
    fn apply(self, competition: &mut Competition) -> Result<(), ActionError> {
        table_mut(competition, self.table_id)?.assign(self.role, self.name)?;
        Ok(())
    }
}
