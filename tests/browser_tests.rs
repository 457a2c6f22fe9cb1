//! Tests for the guardrail browser
//!
//! These tests verify:
//! - Filtering guardrails by project type
//! - Relevance annotation of recommendations
//! - Opening and closing the detail view
//! - Security focus notes

use guardrails::{
    guardrails_for_project_type, security_focus, view_guardrail, Catalog, FocusNote,
    GuardrailBrowser, ProjectConfig, Wizard,
};

fn config_for(catalog: &Catalog, project_type: &str, toggles: &[&str]) -> ProjectConfig {
    let mut wizard = Wizard::new(catalog);
    wizard.select_project_type_id(project_type).unwrap();
    for id in toggles {
        if catalog.technology(id).is_some() {
            wizard.toggle_technology(id);
        } else {
            wizard.toggle_data_type(id);
        }
    }
    wizard.complete().unwrap()
}

fn ids(catalog: &Catalog, project_type: &str) -> Vec<String> {
    guardrails_for_project_type(catalog, project_type)
        .iter()
        .map(|g| g.id.clone())
        .collect()
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn test_website_guardrails() {
    let catalog = Catalog::builtin();
    assert_eq!(
        ids(&catalog, "website"),
        vec![
            "authentication",
            "database_security",
            "input_validation",
            "general_security"
        ]
    );
}

#[test]
fn test_mobile_has_no_database_guardrail() {
    let catalog = Catalog::builtin();
    let mobile = ids(&catalog, "mobile");
    assert!(mobile.contains(&"api_security".to_string()));
    assert!(!mobile.contains(&"database_security".to_string()));
}

#[test]
fn test_unknown_project_type_has_no_guardrails() {
    let catalog = Catalog::builtin();
    assert!(guardrails_for_project_type(&catalog, "desktop").is_empty());
}

#[test]
fn test_every_listed_guardrail_applies() {
    let catalog = Catalog::builtin();
    for project_type in catalog.project_types() {
        for guardrail in guardrails_for_project_type(&catalog, &project_type.id) {
            assert!(guardrail.applies_to(&project_type.id));
        }
    }
}

// =============================================================================
// Relevance annotation
// =============================================================================

#[test]
fn test_view_keeps_every_recommendation_in_order() {
    let catalog = Catalog::builtin();
    let config = config_for(&catalog, "saas", &[]);
    for guardrail in catalog.guardrails() {
        let view = view_guardrail(guardrail, &config);
        let titles: Vec<&str> = view
            .recommendations
            .iter()
            .map(|r| r.recommendation.title.as_str())
            .collect();
        let expected: Vec<&str> = guardrail.recommendations.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, expected);
        assert_eq!(view.code_examples, guardrail.code_examples.as_slice());
    }
}

#[test]
fn test_data_only_recommendation_is_always_relevant() {
    let catalog = Catalog::builtin();
    // Nothing selected at all
    let config = config_for(
        &catalog,
        "website",
        &["react", "angular", "vue", "user_accounts", "content", "analytics"],
    );
    assert!(config.technologies().is_empty());
    assert!(config.data_types().is_empty());

    for guardrail in catalog.guardrails() {
        let view = view_guardrail(guardrail, &config);
        for annotated in &view.recommendations {
            let rec = annotated.recommendation;
            if rec.relevant_technologies.is_none() || rec.relevant_data_types.is_none() {
                assert!(annotated.relevant, "{} should be relevant", rec.title);
            }
        }
    }
}

#[test]
fn test_both_dimensions_missing_is_less_relevant() {
    let catalog = Catalog::builtin();
    let guardrail = catalog.guardrail("authentication").unwrap();

    // Website without user accounts: password hashing matches neither side
    let config = config_for(&catalog, "website", &["user_accounts"]);
    let view = view_guardrail(guardrail, &config);
    let hashing = view
        .recommendations
        .iter()
        .find(|r| r.recommendation.title == "Use password hashing")
        .unwrap();
    assert!(!hashing.relevant);
    assert_eq!(view.relevant_count(), view.recommendations.len() - 1);

    // Matching only the technology side is enough
    let config = config_for(&catalog, "website", &["user_accounts", "django"]);
    let view = view_guardrail(guardrail, &config);
    assert_eq!(view.relevant_count(), view.recommendations.len());
}

// =============================================================================
// Browser state
// =============================================================================

#[test]
fn test_select_and_clear() {
    let catalog = Catalog::builtin();
    let mut browser = GuardrailBrowser::new(&catalog, config_for(&catalog, "api", &[]));
    assert!(browser.selected().is_none());
    assert!(browser.selected_view().is_none());

    assert!(browser.select_guardrail("api_security"));
    assert_eq!(browser.selected().map(|g| g.id.as_str()), Some("api_security"));
    assert_eq!(
        browser.selected_view().map(|v| v.guardrail.id.as_str()),
        Some("api_security")
    );

    browser.clear_selection();
    assert!(browser.selected().is_none());
}

#[test]
fn test_selecting_unlisted_guardrail_is_ignored() {
    let catalog = Catalog::builtin();
    let mut browser = GuardrailBrowser::new(&catalog, config_for(&catalog, "website", &[]));
    assert!(browser.select_guardrail("authentication"));

    // api_security exists in the catalog but not for websites
    assert!(!browser.select_guardrail("api_security"));
    assert!(!browser.select_guardrail("nonexistent"));
    assert_eq!(browser.selected().map(|g| g.id.as_str()), Some("authentication"));
}

// =============================================================================
// Security focus
// =============================================================================

#[test]
fn test_focus_for_ecommerce_defaults() {
    let catalog = Catalog::builtin();
    let config = config_for(&catalog, "ecommerce", &[]);
    assert_eq!(
        security_focus(&config),
        vec![
            FocusNote::HighRiskData,
            FocusNote::NodeApi,
            FocusNote::SqlInjection,
            FocusNote::PaymentProtection
        ]
    );
}

#[test]
fn test_focus_empty_for_plain_website() {
    let catalog = Catalog::builtin();
    // Website defaults include user_accounts, which is high risk
    let config = config_for(&catalog, "website", &["user_accounts"]);
    assert!(security_focus(&config).is_empty());

    let browser = GuardrailBrowser::new(&catalog, config);
    assert!(browser.focus_notes().is_empty());
}
