use super::*;

#[test]
fn loading_document_waits_for_dom_ready() {
    let plan = plan_startup("loading", &ThemeConfig::default());
    assert_eq!(plan, StartupPlan::OnDomReady);
}

#[test]
fn parsed_document_uses_fallback_delay() {
    let config = ThemeConfig::default();
    for state in ["interactive", "complete"] {
        assert_eq!(
            plan_startup(state, &config),
            StartupPlan::AfterDelay { delay_ms: 100 },
            "state={state}"
        );
    }
}

#[test]
fn unknown_ready_state_is_treated_as_parsed() {
    let plan = plan_startup("", &ThemeConfig::default());
    assert!(matches!(plan, StartupPlan::AfterDelay { .. }));
}

#[test]
fn fallback_delay_is_configurable() {
    let config = ThemeConfig {
        fallback_delay_ms: 0,
        ..ThemeConfig::default()
    };
    assert_eq!(
        plan_startup("complete", &config),
        StartupPlan::AfterDelay { delay_ms: 0 }
    );
}
