use crate::harness::{Assertion, Scenario};

const POSES: &str = "313ea471-7c68-4b40-8f46-e5d8e3dc9a4e";
const PROPS: &str = "c5a2e0b7-41de-4b6b-b1f0-7d2f4f6a9e33";

#[test]
fn test_crash_before_save_loses_pending() {
    Scenario::new("crash_before_save")
        .from_fixture("default")
        .saves()
        .creates("saved", "props/saved")
        .saves()
        .creates("lost", "props/lost")
        // NO save before crash
        .crashes()
        .assert_file_unchanged()
        .reloads()
        .assert_live("saved")
        .assert_deleted("lost")
        .assert_no_catalog_at("props/lost")
        .run()
        .unwrap();
}

#[test]
fn test_failed_write_keeps_previous_file() {
    Scenario::new("failed_write")
        .from_fixture("default")
        .saves()
        .creates("pending", "props/pending")
        .blocks_temp_file()
        .save_fails()
        .assert_file_unchanged()
        .assert_unsaved_changes(true)
        .assert_live("pending")
        .unblocks_temp_file()
        .saves()
        .assert_unsaved_changes(false)
        .assert_file_contains("props/pending")
        .run()
        .unwrap();
}

#[test]
fn test_failed_write_still_shows_merged_catalogs() {
    Scenario::new("failed_write_after_merge")
        .from_fixture("default")
        .with_known_id("props", PROPS)
        .saves()
        .creates("mine", "props/lamps")
        .other_store_creates("theirs", "props/rugs")
        .blocks_temp_file()
        .save_fails()
        .assert_file_unchanged()
        .assert_live("theirs")
        .assert_filter_matches("props", &["mine", "theirs"])
        .unblocks_temp_file()
        .saves()
        .assert_filter_matches("props", &["mine", "theirs"])
        .assert_file_contains("props/rugs")
        .run()
        .unwrap();
}

#[test]
fn test_unknown_version_file_is_replaced_with_backup() {
    Scenario::new("future_version_replaced")
        .from_fixture("future_version")
        .assert_catalog_count(0)
        .creates("mine", "mine")
        .saves()
        .assert(Assertion::BackupExists)
        .assert_file_contains("VERSION 1")
        .assert_file_contains(":mine:mine")
        .assert_file_lacks("VERSION 2")
        .reloads()
        .assert_live("mine")
        .run()
        .unwrap();
}

#[test]
fn test_version_gate_after_external_downgrade() {
    Scenario::new("version_gate")
        .from_fixture("default")
        .external_write(&format!("VERSION 7\n{}:character/Ellie/poselib:POSE\n", POSES))
        .reloads()
        .assert_catalog_count(0)
        .assert(Assertion::TreeEmpty)
        .run()
        .unwrap();
}
