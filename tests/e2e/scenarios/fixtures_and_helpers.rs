use crate::harness::{Assertion, Scenario, TestWorkspace};
use catalog_core::{CatalogPath, CatalogStore, StoreConfig, CONFIG_FILENAME};

const POSES: &str = "313ea471-7c68-4b40-8f46-e5d8e3dc9a4e";
const WHITE: &str = "2a191e4c-2fb3-4b47-8a9c-6b8d2a9f4f10";

/// Test that fixture loading works correctly
#[test]
fn test_default_fixture_loads() {
    Scenario::new("default_fixture")
        .from_fixture("default")
        .with_known_id("poses", POSES)
        .with_known_id("white", WHITE)
        // Five records plus four materialized parents
        .assert_catalog_count(9)
        .assert_alias("poses", "POSE")
        .assert_alias("white", "White Ellie")
        .assert_catalog_at("character/Ruzena")
        .assert_tree(&[
            "character",
            "  Ellie",
            "    poselib",
            "      white",
            "  Ruzena",
            "    poselib",
            "props",
            "  furniture",
            "    chairs",
        ])
        .run()
        .unwrap();
}

#[test]
fn test_hand_edited_fixture_skips_bad_lines() {
    Scenario::new("hand_edited_fixture")
        .from_fixture("hand_edited")
        .with_known_id("good", "7d4f6c2a-3b1e-4f5a-8c9d-0e1f2a3b4c5d")
        .with_known_id("spaced", "5e6f7a8b-9c0d-4e1f-a2b3-c4d5e6f7a8b9")
        .with_known_id("bare", "8f9e0d1c-2b3a-4c5d-9e8f-7a6b5c4d3e2f")
        .with_known_id("ignored", "1c2d3e4f-5a6b-4c7d-8e9f-0a1b2c3d4e5f")
        // First occurrence of a duplicated id wins
        .assert_path("good", "good/one")
        .assert_alias("good", "Good One")
        .assert_no_catalog_at("good/duplicate")
        .assert_path("spaced", "spaced/out")
        .assert_alias("spaced", "Spaced Out")
        .assert_path("bare", "no/alias")
        .assert_alias("bare", "")
        .assert_deleted("ignored")
        .assert_no_catalog_at("bad/record")
        // Three records plus their three parents
        .assert_catalog_count(6)
        .run()
        .unwrap();
}

#[test]
fn test_hand_edited_fixture_is_rewritten_cleanly() {
    Scenario::new("hand_edited_rewrite")
        .from_fixture("hand_edited")
        .saves()
        .assert_file_lacks("\r")
        .assert_file_lacks("not-a-uuid")
        .assert_file_contains("5e6f7a8b-9c0d-4e1f-a2b3-c4d5e6f7a8b9:spaced/out:Spaced Out\n")
        .assert(Assertion::BackupExists)
        .run()
        .unwrap();
}

#[test]
fn test_workspace_from_fixture() {
    let workspace = TestWorkspace::from_fixture("default").unwrap();
    let store = workspace.open_store().unwrap();

    assert_eq!(store.definition_file_path(), Some(workspace.definitions_path().as_path()));
    assert!(store
        .tree()
        .find_item(&CatalogPath::new("props/furniture/chairs"))
        .is_some());
}

#[test]
fn test_configured_filename_is_used() {
    let workspace = TestWorkspace::empty().unwrap();
    workspace
        .write_file(
            CONFIG_FILENAME,
            b"[definitions]\nfilename = \"library.cats.txt\"\nkeep_backup = false\n",
        )
        .unwrap();

    let mut store = workspace.open_store().unwrap();
    store.create_catalog("props").unwrap();
    assert!(store.save(workspace.path()));
    assert!(store.save(workspace.path()));

    assert!(workspace.file_exists("library.cats.txt"));
    assert!(!workspace.file_exists("library.cats.txt~"));
    assert!(!workspace.file_exists(catalog_core::DEFAULT_FILENAME));

    let reloaded = CatalogStore::open(workspace.path()).unwrap();
    assert!(reloaded.find_by_path("props").is_some());
    assert_eq!(
        reloaded.config(),
        &StoreConfig::load(workspace.path()).unwrap()
    );
}
