//! Tests for DataSyncOrchestrator::update_data_and_cache.

use saratoga::error::Error;
use saratoga_test_utils::prelude::*;

use crate::util::test_orchestrator;

/// Tests a first run followed by a second run with unchanged upstream data.
///
/// Verifies the cache reflects the downloaded data and that the second run only requests
/// the version record.
///
/// Expected: Ok twice, each dataset requested once in total
#[tokio::test]
async fn syncs_then_stays_current() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_version_endpoint(factory::mock_version(1, 1), 2)
        .with_ship_endpoint(factory::mock_ships(&[1, 2]), 1)
        .with_equipment_endpoint(factory::mock_equipments(&[1, 2, 3]), 1)
        .build()
        .await?;

    let mut orchestrator = test_orchestrator(&test);

    let first = orchestrator.update_data_and_cache().await.unwrap();
    assert_eq!(first.ships_loaded, 2);
    assert_eq!(first.equipments_loaded, 3);

    let second = orchestrator.update_data_and_cache().await.unwrap();
    assert_eq!(second, first);

    test.assert_mocks();

    Ok(())
}

/// Tests that a failing local data phase leaves the cache untouched.
///
/// Expected: Err(Error::Http), cache still empty
#[tokio::test]
async fn keeps_cache_on_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_local_file(SHIP_FILE, &factory::mock_ships(&[1]).to_string())
        .with_error_endpoint(VERSION_PATH, 500, 1)
        .build()
        .await?;

    let mut orchestrator = test_orchestrator(&test);
    let result = orchestrator.update_data_and_cache().await;

    assert!(matches!(result, Err(Error::Http(_))));
    assert!(orchestrator.store().ships().is_empty());

    test.assert_mocks();

    Ok(())
}
