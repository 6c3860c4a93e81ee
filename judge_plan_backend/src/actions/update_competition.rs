use judge_plan_entities::prelude::*;
use serde::{Serialize, Deserialize};

use super::{ActionError, ActionTrait};


#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateCompetitionInfoAction {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub responsible_person: Option<String>,
    #[serde(default)]
    pub judges_meeting_time: Option<String>,
}

impl ActionTrait for UpdateCompetitionInfoAction {
    fn apply(self, competition: &mut Competition) -> Result<(), ActionError> {
        let fields = [
            (self.name, &mut competition.name),
            (self.date, &mut competition.date),
            (self.place, &mut competition.place),
            (self.responsible_person, &mut competition.responsible_person),
            (self.judges_meeting_time, &mut competition.judges_meeting_time),
        ];

        for (value, target) in fields {
            if let Some(value) = value {
                *target = value;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetReplacementJudgesAction {
    pub names: Vec<String>,
}

impl ActionTrait for SetReplacementJudgesAction {
    fn apply(self, competition: &mut Competition) -> Result<(), ActionError> {
        competition.replacement_judges = self.names.into_iter().filter(|n| !n.is_empty()).collect();
        Ok(())
    }
}
