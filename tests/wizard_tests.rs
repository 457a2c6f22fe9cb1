//! Tests for the wizard controller
//!
//! These tests verify:
//! - Seeding from project type defaults
//! - Toggle semantics and ignored operations
//! - Step transitions, back navigation and reset
//! - Finalized configurations as immutable snapshots

use guardrails::{Catalog, Selection, Wizard, WizardStep};
use std::collections::BTreeSet;

fn set(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Seeding
// =============================================================================

#[test]
fn test_mobile_seeds_recommended_stack_and_common_data() {
    let catalog = Catalog::builtin();
    let mut wizard = Wizard::new(&catalog);
    wizard.select_project_type_id("mobile").unwrap();

    let selection = wizard.selection();
    assert_eq!(selection.project_type.as_deref(), Some("mobile"));
    assert_eq!(selection.step, WizardStep::ConfiguringStack);
    assert_eq!(
        selection.selected_technologies,
        set(&["reactnative", "flutter", "swift", "kotlin"])
    );
    assert_eq!(
        selection.selected_data_types,
        set(&["user_accounts", "content", "analytics"])
    );
}

#[test]
fn test_default_selected_data_is_always_seeded() {
    let catalog = Catalog::builtin();
    let mut wizard = Wizard::new(&catalog);

    // Website does not list user_accounts among its common data types
    wizard.select_project_type_id("website").unwrap();
    assert!(wizard.selection().has_data_type("user_accounts"));
    assert!(wizard.selection().has_data_type("content"));
    assert!(wizard.selection().has_data_type("analytics"));
}

#[test]
fn test_every_project_type_seeds_from_catalog() {
    let catalog = Catalog::builtin();
    for project_type in catalog.project_types() {
        let mut wizard = Wizard::new(&catalog);
        wizard.select_project_type(project_type);

        let expected: BTreeSet<String> = project_type.recommended_technologies.iter().cloned().collect();
        assert_eq!(wizard.selection().selected_technologies, expected);
        for data in catalog.data_types() {
            let should_be_selected =
                data.default_selected || project_type.common_data_types.contains(&data.id);
            assert_eq!(wizard.selection().has_data_type(&data.id), should_be_selected);
        }
    }
}

#[test]
fn test_unknown_project_type_is_an_error() {
    let catalog = Catalog::builtin();
    let mut wizard = Wizard::new(&catalog);
    assert!(wizard.select_project_type_id("desktop").is_err());
    assert_eq!(wizard.step(), WizardStep::SelectingType);
}

#[test]
fn test_reselecting_discards_toggles() {
    let catalog = Catalog::builtin();
    let mut wizard = Wizard::new(&catalog);
    wizard.select_project_type_id("api").unwrap();
    let seeded = wizard.selection().clone();

    wizard.toggle_technology("flask");
    wizard.toggle_data_type("medical");
    wizard.go_back_to_step1();
    wizard.select_project_type_id("api").unwrap();

    assert_eq!(wizard.selection(), &seeded);
}

// =============================================================================
// Toggles
// =============================================================================

#[test]
fn test_double_toggle_restores_selection() {
    let catalog = Catalog::builtin();
    let mut wizard = Wizard::new(&catalog);
    wizard.select_project_type_id("saas").unwrap();
    let before = wizard.selection().clone();

    for tech in catalog.technologies() {
        wizard.toggle_technology(&tech.id);
        assert_ne!(wizard.selection(), &before);
        wizard.toggle_technology(&tech.id);
        assert_eq!(wizard.selection(), &before);
    }
    for data in catalog.data_types() {
        wizard.toggle_data_type(&data.id);
        wizard.toggle_data_type(&data.id);
    }
    assert_eq!(wizard.selection(), &before);
}

#[test]
fn test_toggles_ignored_outside_configuration() {
    let catalog = Catalog::builtin();
    let mut wizard = Wizard::new(&catalog);

    wizard.toggle_technology("react");
    wizard.toggle_data_type("pii");
    assert_eq!(wizard.selection(), &Selection::default());

    wizard.select_project_type_id("website").unwrap();
    wizard.complete().unwrap();
    let browsing = wizard.selection().clone();
    wizard.toggle_technology("react");
    wizard.toggle_data_type("pii");
    assert_eq!(wizard.selection(), &browsing);
}

#[test]
fn test_unknown_ids_are_not_toggled() {
    let catalog = Catalog::builtin();
    let mut wizard = Wizard::new(&catalog);
    wizard.select_project_type_id("website").unwrap();
    let before = wizard.selection().clone();

    wizard.toggle_technology("cobol");
    wizard.toggle_data_type("biometrics");
    assert_eq!(wizard.selection(), &before);
}

// =============================================================================
// Transitions
// =============================================================================

#[test]
fn test_go_back_keeps_project_type() {
    let catalog = Catalog::builtin();
    let mut wizard = Wizard::new(&catalog);
    wizard.select_project_type_id("ecommerce").unwrap();
    wizard.toggle_technology("react");
    wizard.go_back_to_step1();

    assert_eq!(wizard.step(), WizardStep::SelectingType);
    assert_eq!(wizard.project_type().map(|p| p.id.as_str()), Some("ecommerce"));
    assert!(!wizard.selection().has_technology("react"));
}

#[test]
fn test_complete_requires_configuration_step() {
    let catalog = Catalog::builtin();
    let mut wizard = Wizard::new(&catalog);
    assert!(wizard.complete().is_none());
    assert_eq!(wizard.step(), WizardStep::SelectingType);

    wizard.select_project_type_id("api").unwrap();
    assert!(wizard.complete().is_some());
    assert_eq!(wizard.step(), WizardStep::Browsing);

    // Completing twice does nothing
    assert!(wizard.complete().is_none());
    assert_eq!(wizard.step(), WizardStep::Browsing);
}

#[test]
fn test_project_type_selection_ignored_while_browsing() {
    let catalog = Catalog::builtin();
    let mut wizard = Wizard::new(&catalog);
    wizard.select_project_type_id("api").unwrap();
    wizard.complete().unwrap();

    wizard.select_project_type_id("website").unwrap();
    assert_eq!(wizard.step(), WizardStep::Browsing);
    assert_eq!(wizard.project_type().map(|p| p.id.as_str()), Some("api"));
}

#[test]
fn test_reset_then_reselect_matches_fresh_wizard() {
    let catalog = Catalog::builtin();

    let mut fresh = Wizard::new(&catalog);
    fresh.select_project_type_id("saas").unwrap();

    let mut used = Wizard::new(&catalog);
    used.select_project_type_id("mobile").unwrap();
    used.toggle_technology("swift");
    used.toggle_data_type("medical");
    used.complete().unwrap();
    used.reset();

    assert_eq!(used.step(), WizardStep::SelectingType);
    assert!(used.config().is_none());
    assert_eq!(used.selection(), &Selection::default());

    used.select_project_type_id("saas").unwrap();
    assert_eq!(used.selection(), fresh.selection());
}

// =============================================================================
// Snapshots
// =============================================================================

#[test]
fn test_config_snapshot_is_unaffected_by_later_changes() {
    let catalog = Catalog::builtin();
    let mut wizard = Wizard::new(&catalog);
    wizard.select_project_type_id("api").unwrap();
    wizard.toggle_data_type("medical");
    let config = wizard.complete().unwrap();
    let copy = config.clone();

    wizard.reset();
    wizard.select_project_type_id("website").unwrap();
    wizard.toggle_technology("nodejs");
    wizard.toggle_data_type("medical");

    assert_eq!(config, copy);
    assert_eq!(config.project_type().id, "api");
    assert!(config.data_ids().contains("medical"));
}

#[test]
fn test_config_resolves_in_catalog_order() {
    let catalog = Catalog::builtin();
    let mut wizard = Wizard::new(&catalog);
    wizard.select_project_type_id("ecommerce").unwrap();
    let config = wizard.complete().unwrap();

    let tech_order: Vec<&str> = config.technologies().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(tech_order, vec!["react", "nodejs", "mysql", "postgresql"]);

    let data_order: Vec<&str> = config.data_types().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(data_order, vec!["user_accounts", "payment_info", "pii"]);
}

#[test]
fn test_empty_configuration_is_allowed() {
    let catalog = Catalog::builtin();
    let mut wizard = Wizard::new(&catalog);
    wizard.select_project_type_id("website").unwrap();
    for id in wizard.selection().selected_technologies.clone() {
        wizard.toggle_technology(&id);
    }
    for id in wizard.selection().selected_data_types.clone() {
        wizard.toggle_data_type(&id);
    }

    let config = wizard.complete().unwrap();
    assert!(config.technologies().is_empty());
    assert!(config.data_types().is_empty());
}
