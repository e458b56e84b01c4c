//! Tests for DataSyncOrchestrator::update_cache.

use saratoga_test_utils::prelude::*;

use crate::util::test_orchestrator;

/// Tests loading the cache from local files only.
///
/// Verifies that no upstream endpoint is requested while the local files are loaded.
///
/// Expected: Ok with counts matching the local files, no requests
#[tokio::test]
async fn loads_local_files_without_network() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_local_file(SHIP_FILE, &factory::mock_ships(&[1, 2, 3]).to_string())
        .with_local_file(EQUIPMENT_FILE, &factory::mock_equipments(&[9]).to_string())
        .with_version_endpoint(factory::mock_version(2, 2), 0)
        .with_ship_endpoint(factory::mock_ships(&[4]), 0)
        .with_equipment_endpoint(factory::mock_equipments(&[4]), 0)
        .build()
        .await?;

    let mut orchestrator = test_orchestrator(&test);
    let report = orchestrator.update_cache().await.unwrap();

    assert_eq!(report.ships_loaded, 3);
    assert_eq!(report.equipments_loaded, 1);
    assert_eq!(report.ships_source, test.data_dir().join(SHIP_FILE));
    assert_eq!(report.equipments_source, test.data_dir().join(EQUIPMENT_FILE));
    assert_eq!(orchestrator.store().ships()[0], factory::mock_ship(1));
    assert_eq!(orchestrator.store().equipments()[0], factory::mock_equipment(9));

    test.assert_mocks();

    Ok(())
}

/// Tests loading freshly initialized placeholder files.
///
/// Expected: Ok with empty caches
#[tokio::test]
async fn accepts_placeholder_files() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let mut orchestrator = test_orchestrator(&test);
    let report = orchestrator.update_cache().await.unwrap();

    assert_eq!(report.ships_loaded, 0);
    assert_eq!(report.equipments_loaded, 0);

    Ok(())
}

/// Tests loading a ship file that is an object rather than a list.
///
/// Expected: Ok, the store derives one record per object value
#[tokio::test]
async fn accepts_object_files() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_local_file(SHIP_FILE, r#"{"a":1}"#)
        .build()
        .await?;

    let mut orchestrator = test_orchestrator(&test);
    let report = orchestrator.update_cache().await.unwrap();

    assert_eq!(report.ships_loaded, 1);
    assert_eq!(orchestrator.store().ships()[0], serde_json::json!(1));

    Ok(())
}
