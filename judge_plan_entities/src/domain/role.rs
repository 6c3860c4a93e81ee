use std::fmt::{Display, Formatter};

use serde::{Serialize, Deserialize};

use super::table_kind::TableKind;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JudgeRole {
    #[serde(rename = "ok")]
    HeadJudge,
    #[serde(rename = "sk1")]
    ScoreJudge1,
    #[serde(rename = "sk2")]
    ScoreJudge2,
    #[serde(rename = "ak1")]
    DifficultyJudge1,
    #[serde(rename = "ak2")]
    DifficultyJudge2,
    #[serde(rename = "ak3")]
    DifficultyJudge3,
    #[serde(rename = "ak4")]
    DifficultyJudge4,
    #[serde(rename = "aik1")]
    ArtistryJudge1,
    #[serde(rename = "aik2")]
    ArtistryJudge2,
    #[serde(rename = "aik3")]
    ArtistryJudge3,
    #[serde(rename = "aik4")]
    ArtistryJudge4,
}

const BASE_ROLES: [JudgeRole; 7] = [
    JudgeRole::HeadJudge,
    JudgeRole::ScoreJudge1,
    JudgeRole::ScoreJudge2,
    JudgeRole::DifficultyJudge1,
    JudgeRole::DifficultyJudge2,
    JudgeRole::DifficultyJudge3,
    JudgeRole::DifficultyJudge4,
];

const ARTISTRY_ROLES: [JudgeRole; 4] = [
    JudgeRole::ArtistryJudge1,
    JudgeRole::ArtistryJudge2,
    JudgeRole::ArtistryJudge3,
    JudgeRole::ArtistryJudge4,
];

impl JudgeRole {
    /// All roles a table of the given kind has, in the order they are printed.
    pub fn roles_for_kind(kind: TableKind) -> Vec<JudgeRole> {
        if kind.is_music() {
            BASE_ROLES.iter().chain(ARTISTRY_ROLES.iter()).copied().collect()
        }
        else {
            BASE_ROLES.to_vec()
        }
    }

    pub fn is_artistry(&self) -> bool {
        ARTISTRY_ROLES.contains(self)
    }

    pub fn is_valid_for(&self, kind: TableKind) -> bool {
        !self.is_artistry() || kind.is_music()
    }

    /// Short key used in saved files and on printed sheets.
    pub fn key(&self) -> &'static str {
        match self {
            JudgeRole::HeadJudge => "ok",
            JudgeRole::ScoreJudge1 => "sk1",
            JudgeRole::ScoreJudge2 => "sk2",
            JudgeRole::DifficultyJudge1 => "ak1",
            JudgeRole::DifficultyJudge2 => "ak2",
            JudgeRole::DifficultyJudge3 => "ak3",
            JudgeRole::DifficultyJudge4 => "ak4",
            JudgeRole::ArtistryJudge1 => "aik1",
            JudgeRole::ArtistryJudge2 => "aik2",
            JudgeRole::ArtistryJudge3 => "aik3",
            JudgeRole::ArtistryJudge4 => "aik4",
        }
    }

    pub fn from_key(key: &str) -> Option<JudgeRole> {
        BASE_ROLES.iter().chain(ARTISTRY_ROLES.iter()).find(|r| r.key() == key).copied()
    }
}

impl Display for JudgeRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key().to_uppercase())
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_music_tables_have_artistry_roles() {
        let roles = JudgeRole::roles_for_kind(TableKind::StraightLineMusic);
        assert_eq!(roles.len(), 11);
        assert_eq!(roles.last(), Some(&JudgeRole::ArtistryJudge4));
    }

    #[test]
    fn test_other_tables_have_no_artistry_roles() {
        for kind in [TableKind::StraightLine, TableKind::Spiral, TableKind::Vault] {
            let roles = JudgeRole::roles_for_kind(kind);
            assert_eq!(roles.len(), 7);
            assert!(roles.iter().all(|r| !r.is_artistry()));
            assert!(!JudgeRole::ArtistryJudge2.is_valid_for(kind));
        }
    }

    #[test]
    fn test_key_matches_serialized_name() -> Result<(), anyhow::Error> {
        for role in JudgeRole::roles_for_kind(TableKind::StraightLineMusic) {
            assert_eq!(serde_json::to_string(&role)?, format!("\"{}\"", role.key()));
            assert_eq!(JudgeRole::from_key(role.key()), Some(role));
        }
        assert_eq!(JudgeRole::from_key("xyz"), None);
        Ok(())
    }
}
