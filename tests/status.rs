// tests/status.rs

//! Integration coverage for status classification against manifest,
//! filesystem, and registry.

mod common;

use std::fs;

use common::{install_from, item, UnreachableRegistry};
use luman::{
    ComponentStatus, FileState, InMemoryRegistry, ManifestStore, ProjectConfig, StatusClassifier,
};

const BUTTON_SRC: &str = "export function Button() { return null; }\n";

#[test]
fn scenario_a_unchanged_since_install() {
    let dir = tempfile::tempdir().unwrap();
    let config = ProjectConfig::default();
    let button = item("button", "1.0.0", &[], &[("ui/button.tsx", BUTTON_SRC)]);
    let registry = InMemoryRegistry::from_items([button.clone()]);
    install_from(dir.path(), &registry, &config, &button);

    let result = StatusClassifier::with_registry(dir.path(), &registry)
        .check_component("button")
        .unwrap();

    assert_eq!(
        result.status,
        ComponentStatus::Unchanged {
            version: "1.0.0".to_string()
        }
    );
    assert!(result.files.iter().all(|f| f.state == FileState::Ok));
}

#[test]
fn scenario_b_hand_edited_file_is_customized() {
    let dir = tempfile::tempdir().unwrap();
    let config = ProjectConfig::default();
    let button = item("button", "1.0.0", &[], &[("ui/button.tsx", BUTTON_SRC)]);
    let registry = InMemoryRegistry::from_items([button.clone()]);
    install_from(dir.path(), &registry, &config, &button);

    let local = dir.path().join("src/components/ui/button.tsx");
    fs::write(&local, "export function Button() { return <b/>; }\n").unwrap();

    let result = StatusClassifier::with_registry(dir.path(), &registry)
        .check_component("button")
        .unwrap();

    assert_eq!(
        result.status,
        ComponentStatus::Customized {
            version: "1.0.0".to_string()
        }
    );
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].state, FileState::Modified);
}

#[test]
fn scenario_c_newer_registry_version_is_outdated() {
    let dir = tempfile::tempdir().unwrap();
    let config = ProjectConfig::default();
    let card_v1 = item("card", "1.0.0", &[], &[("ui/card.tsx", "v1\n")]);
    let registry_v1 = InMemoryRegistry::from_items([card_v1.clone()]);
    install_from(dir.path(), &registry_v1, &config, &card_v1);

    // The registry moves on; local files are untouched.
    let registry_v2 =
        InMemoryRegistry::from_items([item("card", "1.1.0", &[], &[("ui/card.tsx", "v2\n")])]);

    let result = StatusClassifier::with_registry(dir.path(), &registry_v2)
        .check_component("card")
        .unwrap();

    assert_eq!(
        result.status,
        ComponentStatus::Outdated {
            installed_version: "1.0.0".to_string(),
            latest_version: "1.1.0".to_string(),
        }
    );
}

#[test]
fn scenario_d_deleted_file_reports_missing_detail_and_customized() {
    let dir = tempfile::tempdir().unwrap();
    let config = ProjectConfig::default();
    let dialog = item("dialog", "1.0.0", &[], &[("ui/dialog.tsx", "d\n")]);
    let registry = InMemoryRegistry::from_items([dialog.clone()]);
    install_from(dir.path(), &registry, &config, &dialog);

    fs::remove_file(dir.path().join("src/components/ui/dialog.tsx")).unwrap();

    let result = StatusClassifier::with_registry(dir.path(), &registry)
        .check_component("dialog")
        .unwrap();

    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].state, FileState::Missing);
    // The empty surviving-file hash can never equal the stored hash.
    assert_eq!(
        result.status,
        ComponentStatus::Customized {
            version: "1.0.0".to_string()
        }
    );
}

#[test]
fn offline_registry_with_matching_hash_is_unchanged_never_outdated() {
    let dir = tempfile::tempdir().unwrap();
    let config = ProjectConfig::default();
    let button = item("button", "1.0.0", &[], &[("ui/button.tsx", BUTTON_SRC)]);
    let registry = InMemoryRegistry::from_items([button.clone()]);
    install_from(dir.path(), &registry, &config, &button);

    let result = StatusClassifier::with_registry(dir.path(), &UnreachableRegistry)
        .check_component("button")
        .unwrap();

    assert_eq!(
        result.status,
        ComponentStatus::Unchanged {
            version: "1.0.0".to_string()
        }
    );
}

#[test]
fn registry_that_dropped_the_component_is_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let config = ProjectConfig::default();
    let button = item("button", "1.0.0", &[], &[("ui/button.tsx", BUTTON_SRC)]);
    let registry = InMemoryRegistry::from_items([button.clone()]);
    install_from(dir.path(), &registry, &config, &button);

    let empty = InMemoryRegistry::new();
    let result = StatusClassifier::with_registry(dir.path(), &empty)
        .check_component("button")
        .unwrap();

    assert_eq!(
        result.status,
        ComponentStatus::Unchanged {
            version: "1.0.0".to_string()
        }
    );
}

#[test]
fn untracked_iff_absent_from_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let config = ProjectConfig::default();
    let button = item("button", "1.0.0", &[], &[("ui/button.tsx", BUTTON_SRC)]);
    let registry = InMemoryRegistry::from_items([button.clone()]);
    install_from(dir.path(), &registry, &config, &button);

    let classifier = StatusClassifier::with_registry(dir.path(), &registry);
    assert_eq!(
        classifier.check_component("dialog").unwrap().status,
        ComponentStatus::Untracked
    );
    assert_ne!(
        classifier.check_component("button").unwrap().status,
        ComponentStatus::Untracked
    );
}

#[test]
fn check_all_classifies_each_component_independently() {
    let dir = tempfile::tempdir().unwrap();
    let config = ProjectConfig::default();
    let button = item("button", "1.0.0", &[], &[("ui/button.tsx", BUTTON_SRC)]);
    let card = item("card", "1.0.0", &[], &[("ui/card.tsx", "c\n")]);
    let registry = InMemoryRegistry::from_items([button.clone(), card.clone()]);
    install_from(dir.path(), &registry, &config, &button);
    install_from(dir.path(), &registry, &config, &card);

    fs::write(dir.path().join("src/components/ui/card.tsx"), "edited\n").unwrap();

    let results = StatusClassifier::with_registry(dir.path(), &registry)
        .check_all()
        .unwrap();
    assert_eq!(results.len(), 2);

    let by_name = |n: &str| results.iter().find(|r| r.name == n).unwrap();
    assert!(matches!(
        by_name("button").status,
        ComponentStatus::Unchanged { .. }
    ));
    assert!(matches!(
        by_name("card").status,
        ComponentStatus::Customized { .. }
    ));
}

#[test]
fn check_all_without_manifest_is_an_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let results = StatusClassifier::new(dir.path()).check_all().unwrap();
    assert!(results.is_empty());
}

#[test]
fn corrupt_manifest_is_a_hard_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = ManifestStore::new(dir.path());
    fs::create_dir_all(dir.path().join(".luman")).unwrap();
    fs::write(store.manifest_path(), "{ definitely not json").unwrap();

    assert!(StatusClassifier::new(dir.path()).check_all().is_err());
    assert!(
        StatusClassifier::new(dir.path())
            .check_component("button")
            .is_err()
    );
}
