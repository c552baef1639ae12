use world_interact::config::InteractionConfig;
use world_interact::lifecycle::{InteractionSystem, StartupError};
use world_interact::model::{Balance, JsonFileZones, StaticZones, Vec3, WorldMap, ZoneId, ZoneProvider};
use world_interact::notify::Outbound;

/// Boot the system from a JSON zone dump on disk and run an interaction
/// against the loaded data.
#[tokio::test]
async fn test_system_boots_from_json_zone_dump() {
    let path = std::env::temp_dir().join(format!(
        "world_interact_zones_{}_boot.json",
        std::process::id()
    ));
    let data = r#"[
        {"category": "ATM", "position": {"x": 3.0, "y": 0.0, "z": 0.0}, "zone": 1}
    ]"#;
    tokio::fs::write(&path, data).await.unwrap();

    let provider = JsonFileZones::new(&path);
    let config = InteractionConfig {
        max_interaction_distance: 5.0,
        ..Default::default()
    };
    let mut system = InteractionSystem::load(&provider, config)
        .await
        .expect("startup from file failed");

    let id = system
        .world_client
        .connect("Alice", Vec3::default(), ZoneId(1), Balance::default())
        .await
        .unwrap();
    system.world_client.interact(id, "atm").await.unwrap();

    let payload = system.outbound.try_recv().expect("expected a delegation");
    assert!(matches!(payload.1, Outbound::ClientEvent { .. }));

    system.shutdown().await.unwrap();
    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn test_malformed_zone_dump_fails_startup() {
    let path = std::env::temp_dir().join(format!(
        "world_interact_zones_{}_bad.json",
        std::process::id()
    ));
    tokio::fs::write(&path, "{definitely not a dump").await.unwrap();

    let provider = JsonFileZones::new(&path);
    let result = InteractionSystem::load(&provider, InteractionConfig::default()).await;
    assert!(matches!(result, Err(StartupError::Zone(_))));

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn test_static_zones_round_trip() {
    let provider = StaticZones(WorldMap::new());
    let zones = provider.load().await.unwrap();
    assert!(zones.is_empty());
}
