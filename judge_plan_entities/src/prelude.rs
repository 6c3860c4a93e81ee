pub use crate::domain::{
    competition::Competition,
    judging_table::{Assignment, JudgingTable},
    role::JudgeRole,
    table_kind::TableKind,
    ComparabilityGroup,
    EntityError,
};

pub use uuid::Uuid;
