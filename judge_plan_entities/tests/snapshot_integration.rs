use judge_plan_entities::{mock::{make_mock_competition_with_options, MockOption}, prelude::*, snapshot::{read_competition, write_competition}};


#[test]
fn test_mock_competition_survives_saving() -> Result<(), anyhow::Error> {
    let competition = make_mock_competition_with_options(MockOption { deterministic_uuids: true, num_regular_tables: 9, num_finale_tables: 4, ..Default::default() });

    let mut buffer = Vec::new();
    write_competition(&mut buffer, &competition)?;
    let mut loaded = read_competition(&buffer[..])?;

    let mut expected = competition.clone();
    loaded.tables.sort_by_key(|t| t.uuid);
    expected.tables.sort_by_key(|t| t.uuid);

    assert_eq!(loaded, expected);
    Ok(())
}

#[test]
fn test_saved_file_uses_original_keys() -> Result<(), anyhow::Error> {
    let mut competition = Competition::new("Test");
    let mut table = JudgingTable::new(Uuid::from_u128(1), "KG 1", TableKind::StraightLineMusic);
    table.assign(JudgeRole::ArtistryJudge1, "Anna")?;
    competition.add_table(table)?;

    let mut buffer = Vec::new();
    write_competition(&mut buffer, &competition)?;
    let value: serde_json::Value = serde_json::from_slice(&buffer)?;

    let table_value = &value["wk_judgingtables"]["00000000-0000-0000-0000-000000000001"];
    assert_eq!(table_value["table_kind"], "Geradeturnen auf Musik");
    assert_eq!(table_value["judges"]["aik1"]["name"], "Anna");
    assert_eq!(table_value["judges"]["aik1"]["doubleFound"], false);
    assert_eq!(value["wk_name"], "Test");
    Ok(())
}
