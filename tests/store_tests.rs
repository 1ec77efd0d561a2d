// SPDX-License-Identifier: Apache-2.0
use std::fs;
use std::path::PathBuf;

use letterforge::store::{EmailStore, LAYOUT_FILE, UPLOADS_DIR};
use serde_json::json;
use uuid::Uuid;

/// Create a store rooted in a throwaway temp directory
fn temp_store() -> (EmailStore, PathBuf) {
    let root = std::env::temp_dir().join(format!("letterforge-test-{}", Uuid::new_v4().simple()));
    fs::create_dir_all(&root).unwrap();
    (EmailStore::new(root.clone()), root)
}

#[test]
fn test_layout_read_is_byte_identical() {
    let (store, root) = temp_store();
    let layout = "<html><body>{{title}}</body></html>";
    fs::write(root.join(LAYOUT_FILE), layout).unwrap();

    assert_eq!(store.read_layout().unwrap(), layout);

    fs::remove_dir_all(root).ok();
}

#[test]
fn test_missing_layout_is_an_error() {
    let (store, root) = temp_store();
    assert!(store.read_layout().is_err());
    fs::remove_dir_all(root).ok();
}

#[test]
fn test_save_config_pretty_prints() {
    let (store, root) = temp_store();

    store.save_config(&json!({"a": 1})).unwrap();
    let on_disk = fs::read_to_string(store.config_path()).unwrap();
    assert_eq!(on_disk, "{\n  \"a\": 1\n}");

    fs::remove_dir_all(root).ok();
}

#[test]
fn test_save_config_replaces_wholesale() {
    let (store, root) = temp_store();

    store.save_config(&json!({"a": 1})).unwrap();
    store.save_config(&json!({"b": 2})).unwrap();

    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.config_path()).unwrap()).unwrap();
    assert_eq!(on_disk, json!({"b": 2}));
    assert!(on_disk.get("a").is_none(), "old keys must not survive a save");

    fs::remove_dir_all(root).ok();
}

#[test]
fn test_store_upload_keeps_original_name_as_suffix() {
    let (store, root) = temp_store();
    let data = b"\x89PNG fake image bytes";

    let stored = store.store_upload("logo.png", data).unwrap();
    assert!(stored.ends_with("-logo.png"));

    // The leading segment is the upload timestamp
    let prefix = stored.split('-').next().unwrap();
    assert!(prefix.chars().all(|c| c.is_ascii_digit()));

    let on_disk = fs::read(root.join(UPLOADS_DIR).join(&stored)).unwrap();
    assert_eq!(on_disk, data);

    fs::remove_dir_all(root).ok();
}

#[test]
fn test_rapid_identical_uploads_never_collide() {
    let (store, root) = temp_store();

    let mut names = std::collections::HashSet::new();
    for i in 0..20u8 {
        let stored = store.store_upload("same.png", &[i]).unwrap();
        assert!(names.insert(stored), "stored names must be unique");
    }
    assert_eq!(fs::read_dir(root.join(UPLOADS_DIR)).unwrap().count(), 20);

    fs::remove_dir_all(root).ok();
}

#[test]
fn test_upload_name_is_confined_to_uploads_dir() {
    let (store, root) = temp_store();

    let stored = store.store_upload("../../escape.png", b"data").unwrap();
    assert!(stored.ends_with("-escape.png"));
    assert!(!stored.contains(".."));
    assert!(root.join(UPLOADS_DIR).join(&stored).exists());

    fs::remove_dir_all(root).ok();
}
