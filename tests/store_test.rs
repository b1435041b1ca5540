use draftboard::cache::TextCache;
use draftboard::config::{AppConfig, CacheConfig};
use draftboard::models::{FilterState, TeamDirectory};
use draftboard::store::DraftStore;
use draftboard::AppState;
use std::fs;

const OKC_FILE: &str = "\
Year,Rd,Pick,Player,Pos,HT,WT,Age,Pre-Draft Team,Class,Draft Trades,YOS
2008,1,4,Russell Westbrook,G,6-3,200,19,UCLA,So,,17
2008,2,2,Serge Ibaka,F,6-10,235,18,Ricoh Manresa,Intl,,14";

const BOS_FILE: &str = "\
Year,Rd,Pick,Player,Pos,HT,WT,Age,Pre-Draft Team,Class,Draft Trades,YOS
1998,1,10,Paul Pierce,F,6-7,230,20,Kansas,Jr,,19";

fn write_fixture(dir: &std::path::Path) -> AppConfig {
    fs::write(
        dir.join("teams.json"),
        r#"{"OKC": ["Oklahoma-City-Thunder", 33], "BOS": ["Boston-Celtics", 9], "MIA": ["Miami-Heat", 22]}"#,
    )
    .unwrap();
    fs::write(dir.join("OKC.csv"), OKC_FILE).unwrap();
    fs::write(dir.join("BOS.csv"), BOS_FILE).unwrap();
    // MIA.csv deliberately missing

    AppConfig {
        data_dir: dir.to_path_buf(),
        cache: CacheConfig {
            dir: dir.join("cache"),
            app_version: "1.0.0".to_string(),
            enabled: true,
        },
        ..AppConfig::default()
    }
}

#[tokio::test]
async fn test_load_continues_past_missing_source() {
    let tmp = tempfile::tempdir().unwrap();
    let config = write_fixture(tmp.path());

    let manifest = fs::read_to_string(config.manifest_path()).unwrap();
    let directory = TeamDirectory::from_json(&manifest).unwrap();
    assert_eq!(directory.len(), 3);

    let mut cache = TextCache::open(&config.cache);
    let store = DraftStore::load(&config, &directory, &mut cache).await;

    // MIA contributed nothing, the others loaded fully
    assert_eq!(store.len(), 3);
    let visible = store.visible(&FilterState::default(), 2025);
    assert_eq!(visible[0].player, "Russell Westbrook");
}

#[tokio::test]
async fn test_cache_serves_when_source_disappears() {
    let tmp = tempfile::tempdir().unwrap();
    let config = write_fixture(tmp.path());

    let manifest = fs::read_to_string(config.manifest_path()).unwrap();
    let directory = TeamDirectory::from_json(&manifest).unwrap();

    let mut cache = TextCache::open(&config.cache);
    let first = DraftStore::load(&config, &directory, &mut cache).await;
    assert_eq!(first.len(), 3);

    // Source files vanish; the cached payloads still satisfy the load
    fs::remove_file(config.team_file_path("OKC")).unwrap();
    fs::remove_file(config.team_file_path("BOS")).unwrap();

    let second = DraftStore::load(&config, &directory, &mut cache).await;
    assert_eq!(second.len(), 3);
}

#[tokio::test]
async fn test_app_state_load_assembles_full_state() {
    let tmp = tempfile::tempdir().unwrap();
    let config = write_fixture(tmp.path());

    let state = AppState::load(config).await.unwrap();
    assert_eq!(state.directory.len(), 3);
    assert_eq!(state.store.len(), 3);
    let visible = state.store.visible(&FilterState::default(), 2025);
    assert_eq!(visible[0].player, "Russell Westbrook");
}

#[tokio::test]
async fn test_app_state_load_requires_manifest() {
    // An unreadable manifest is the one fatal load failure
    let tmp = tempfile::tempdir().unwrap();
    let config = AppConfig {
        data_dir: tmp.path().to_path_buf(),
        ..AppConfig::default()
    };
    assert!(AppState::load(config).await.is_err());
}

#[tokio::test]
async fn test_malformed_source_rejected_independently() {
    let tmp = tempfile::tempdir().unwrap();
    let config = write_fixture(tmp.path());

    // BOS loses a required column; only BOS is rejected
    fs::write(
        config.team_file_path("BOS"),
        "Year,Rd,Pick,Player\n1998,1,10,Paul Pierce",
    )
    .unwrap();

    let manifest = fs::read_to_string(config.manifest_path()).unwrap();
    let directory = TeamDirectory::from_json(&manifest).unwrap();

    let mut cache = TextCache::disabled();
    let store = DraftStore::load(&config, &directory, &mut cache).await;
    assert_eq!(store.len(), 2);
    assert!(store.records().iter().all(|p| p.team == "OKC"));
}
