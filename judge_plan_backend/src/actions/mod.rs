use judge_plan_entities::prelude::*;

use serde::{Serialize, Deserialize};

mod base;
mod update_table;
mod assign_judge;
mod update_competition;

pub use self::base::{ActionTrait, ActionError};
pub use self::update_table::{CreateTableAction, UpdateTableAction, DeleteTableAction};
pub use self::assign_judge::AssignJudgeAction;
pub use self::update_competition::{UpdateCompetitionInfoAction, SetReplacementJudgesAction};

use crate::conflicts::detect_conflicts;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    CreateTable { action: CreateTableAction },
    UpdateTable { action: UpdateTableAction },
    DeleteTable { action: DeleteTableAction },
    AssignJudge { action: AssignJudgeAction },
    UpdateCompetitionInfo { action: UpdateCompetitionInfoAction },
    SetReplacementJudges { action: SetReplacementJudgesAction },
}

impl Action {
    /// Applies the action and recomputes all conflict flags.
    /// Returns whether the competition has conflicts afterwards.
    pub fn execute(self, competition: &mut Competition) -> Result<bool, ActionError> {
        match self {
            Action::CreateTable { action } => action.apply(competition),
            Action::UpdateTable { action } => action.apply(competition),
            Action::DeleteTable { action } => action.apply(competition),
            Action::AssignJudge { action } => action.apply(competition),
            Action::UpdateCompetitionInfo { action } => action.apply(competition),
            Action::SetReplacementJudges { action } => action.apply(competition),
        }?;

        Ok(detect_conflicts(competition))
    }
}
