//! Headless shell tests: file-backed persistence across sessions

use fanpage::{headless_page, AppConfig, AppEvent};
use fanpage_core::types::PostId;
use fanpage_ui::EditorField;
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.storage.path = dir.path().join("posts.json");
    config
}

#[test]
fn posts_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    {
        let (mut page, _timers) = headless_page(&config, true).unwrap();
        page.handle(AppEvent::EditorInput {
            field: EditorField::Title,
            value: "Persisted".to_string(),
        })
        .unwrap();
        page.handle(AppEvent::SubmitEditor).unwrap();
    }

    let (page, _timers) = headless_page(&config, true).unwrap();
    let titles: Vec<_> = page
        .posts_view()
        .cards()
        .iter()
        .map(|c| c.title.clone())
        .collect();
    assert_eq!(titles.len(), 4);
    assert_eq!(titles[0], "Persisted");
}

#[test]
fn assume_yes_confirms_deletes() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let (mut page, _timers) = headless_page(&config, true).unwrap();
    page.handle(AppEvent::DeletePost { id: PostId::new("2") }).unwrap();

    assert_eq!(page.posts_view().cards().len(), 2);
    assert!(page.store().get(&PostId::new("2")).is_none());
}

#[test]
fn custom_storage_key_is_used() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    config.storage.key = "posts_custom".to_string();

    let (mut page, _timers) = headless_page(&config, true).unwrap();
    page.handle(AppEvent::DeletePost { id: PostId::new("1") }).unwrap();

    let raw = std::fs::read_to_string(&config.storage.path).unwrap();
    assert!(raw.contains("posts_custom"));
    assert!(!raw.contains("fanpage_posts_v1"));
}

#[test]
fn config_file_is_loaded_from_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fanpage.toml");
    std::fs::write(&path, "[playback]\npreview_volume = 0.4\n").unwrap();

    let config = AppConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(config.playback.preview_volume, 0.4);
}

#[test]
fn missing_config_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(AppConfig::load(Some(dir.path().join("absent.toml").as_path())).is_err());
}
