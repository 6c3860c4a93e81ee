use faker_rand::en_us::names::FullName;
use itertools::Itertools;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use uuid::Uuid;

use crate::domain::{competition::Competition, judging_table::{Assignment, JudgingTable}, role::JudgeRole, table_kind::TableKind};


#[derive(Debug)]
pub struct MockOption {
    pub deterministic_uuids: bool,
    pub num_regular_tables: u32,
    pub num_finale_tables: u32,
    /// Size of the pool judge names are drawn from. A small pool makes double assignments likely.
    pub num_judges: u32,
    pub use_random_names: bool,
    pub seed: u64,
}

impl Default for MockOption {
    fn default() -> Self {
        Self {
            deterministic_uuids: false,
            num_regular_tables: 6,
            num_finale_tables: 2,
            num_judges: 60,
            use_random_names: false,
            seed: 0,
        }
    }
}

pub fn make_mock_competition_with_options(options: MockOption) -> Competition {
    /*
    Deterministic uuids:
    Regular tables: 100
    Finale tables: 200
    */
    let mut rng = StdRng::seed_from_u64(options.seed);

    let judge_names = (0..options.num_judges.max(1)).map(|i| {
        if options.use_random_names {
            rng.gen::<FullName>().to_string()
        }
        else {
            format!("Judge {}", i)
        }
    }).collect_vec();

    let kinds = TableKind::all();

    let regular = (0..options.num_regular_tables).map(|i| (100 + i, false, format!("Table {}", i + 1)));
    let finale = (0..options.num_finale_tables).map(|i| (200 + i, true, format!("Finale {}", i + 1)));

    let tables = regular.chain(finale).map(|(id, is_finale, name)| {
        let uuid = if options.deterministic_uuids {
            Uuid::from_u128(id as u128)
        }
        else {
            Uuid::new_v4()
        };

        let kind = kinds[id as usize % kinds.len()];
        let mut table = JudgingTable::new(uuid, name, kind);
        table.is_finale = is_finale;

        for role in JudgeRole::roles_for_kind(kind) {
            if let Some(name) = judge_names.choose(&mut rng) {
                table.assignments.insert(role, Assignment::new(name.clone()));
            }
        }
        table
    }).collect_vec();

    Competition {
        name: "Mock Competition".into(),
        date: "2024-05-04".into(),
        place: "Mock Hall".into(),
        responsible_person: "Mock Person".into(),
        judges_meeting_time: "08:00".into(),
        replacement_judges: judge_names.iter().take(2).cloned().collect(),
        tables,
    }
}
