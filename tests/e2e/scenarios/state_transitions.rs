use crate::harness::{Assertion, Scenario};
use catalog_core::{CatalogStore, MAX_ALIAS_LEN};

const CHAIRS: &str = "e0a7cb11-8a4f-4f53-9a5b-3c2d1e0f9b44";
const PROPS: &str = "c5a2e0b7-41de-4b6b-b1f0-7d2f4f6a9e33";

#[test]
fn test_move_takes_descendants_along() {
    Scenario::new("move_subtree")
        .creates("lib", "charlib")
        .creates("sub", "charlib/sub")
        .creates("sibling", "charlibrary")
        .moves("lib", "newlib")
        .assert_path("lib", "newlib")
        .assert_path("sub", "newlib/sub")
        .assert_path("sibling", "charlibrary")
        .assert_alias("sub", "charlib-sub")
        .assert_tree(&["newlib", "  sub", "charlibrary"])
        .saves()
        .reloads()
        .assert_path("sub", "newlib/sub")
        .run()
        .unwrap();
}

#[test]
fn test_delete_does_not_cascade() {
    Scenario::new("delete_no_cascade")
        .from_fixture("default")
        .with_known_id("props", PROPS)
        .with_known_id("chairs", CHAIRS)
        .deletes("props")
        .assert_deleted("props")
        .assert_live("chairs")
        // The item survives as long as something lives below it
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
        .saves()
        .assert_file_lacks(PROPS)
        .reloads()
        .assert_deleted("props")
        .assert_live("chairs")
        .run()
        .unwrap();
}

#[test]
fn test_prune_deletes_subtree() {
    Scenario::new("prune_subtree")
        .from_fixture("default")
        .with_known_id("props", PROPS)
        .with_known_id("chairs", CHAIRS)
        .prunes("props")
        .assert_deleted("props")
        .assert_deleted("chairs")
        .assert_no_catalog_at("props/furniture")
        .assert_tree(&[
            "character",
            "  Ellie",
            "    poselib",
            "      white",
            "  Ruzena",
            "    poselib",
        ])
        .saves()
        .assert_file_lacks("props")
        .run()
        .unwrap();
}

#[test]
fn test_alias_change_persists() {
    Scenario::new("alias_change")
        .from_fixture("default")
        .with_known_id("chairs", CHAIRS)
        .saves()
        .aliases("chairs", "  Seating  ")
        .assert_alias("chairs", "Seating")
        .assert_unsaved_changes(true)
        .saves()
        .assert_file_contains(&format!("{}:props/furniture/chairs:Seating", CHAIRS))
        .run()
        .unwrap();
}

#[test]
fn test_long_alias_is_clamped() {
    let long_path = format!("long/{}", "x".repeat(80));
    Scenario::new("long_alias")
        .creates("long", &long_path)
        .assert(Assertion::Custom(Box::new(|store: &mut CatalogStore| -> anyhow::Result<()> {
            let catalog = store
                .iter_catalogs()
                .next()
                .ok_or_else(|| anyhow::anyhow!("no catalog"))?;
            anyhow::ensure!(
                catalog.display_alias().len() <= MAX_ALIAS_LEN,
                "alias too long: {}",
                catalog.display_alias().len()
            );
            anyhow::ensure!(catalog.display_alias().starts_with("..."));
            Ok(())
        })))
        .run()
        .unwrap();
}
