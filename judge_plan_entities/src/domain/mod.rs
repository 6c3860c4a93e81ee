use serde::{Serialize, Deserialize};
use thiserror::Error;
use uuid::Uuid;

pub mod role;
pub mod table_kind;
pub mod judging_table;
pub mod competition;

use role::JudgeRole;
use table_kind::TableKind;


#[derive(Error, Debug, PartialEq, Eq)]
pub enum EntityError {
    #[error("Role {role} does not exist for tables of kind {kind}")]
    RoleNotValidForKind { role: JudgeRole, kind: TableKind },
    #[error("Table {0} does not exist")]
    TableDoesNotExist(Uuid),
    #[error("Table {0} already exists")]
    DuplicateTable(Uuid),
}

/// Tables are only compared against tables of the same group when looking
/// for double assignments. Finale tables are also printed on their own pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComparabilityGroup {
    Regular,
    Finale,
}

impl ComparabilityGroup {
    pub fn from_is_finale(is_finale: bool) -> Self {
        if is_finale {
            ComparabilityGroup::Finale
        }
        else {
            ComparabilityGroup::Regular
        }
    }
}
