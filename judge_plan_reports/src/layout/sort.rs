use judge_plan_entities::prelude::*;


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedTables<'a> {
    pub regular: Vec<&'a JudgingTable>,
    pub finale: Vec<&'a JudgingTable>,
}

pub fn sort_tables(competition: &Competition) -> SortedTables<'_> {
    SortedTables {
        regular: sorted_by_name(competition.regular_tables()),
        finale: sorted_by_name(competition.finale_tables()),
    }
}

/// Case-insensitive by name. Equal names keep their input order.
pub fn sorted_by_name<'a, I>(tables: I) -> Vec<&'a JudgingTable> where I: IntoIterator<Item = &'a JudgingTable> {
    let mut tables: Vec<_> = tables.into_iter().collect();
    tables.sort_by_cached_key(|t| t.name.to_lowercase());
    tables
}
