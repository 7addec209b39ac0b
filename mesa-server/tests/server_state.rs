//! On-disk startup

mod common;

use mesa_server::core::ServerState;

#[tokio::test]
async fn initialize_creates_database_under_work_dir() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = common::test_config();
    config.work_dir = dir.path().to_string_lossy().into_owned();

    let state = ServerState::initialize(&config).await.unwrap();
    assert!(config.database_dir().is_dir());

    let settings = mesa_server::db::repository::SettingsRepository::new(state.get_db())
        .get_or_create()
        .await
        .unwrap();
    assert_eq!(settings.settings_id, "global");
}
