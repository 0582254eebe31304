use super::*;

fn filled_form() -> CampaignForm {
    let mut form = CampaignForm::default();
    form.set_name("Summer Menu Launch".to_owned());
    form.toggle_platform(Platform::Instagram);
    form.set_start_date("2026-06-01".to_owned());
    form.set_end_date("2026-06-30".to_owned());
    form.set_task_count("3".to_owned());
    form
}

// =============================================================
// Happy paths
// =============================================================

#[test]
fn barter_campaign_validates_without_budget() {
    let draft = filled_form().validate().expect("barter form should validate");
    assert_eq!(draft.campaign_name, "Summer Menu Launch");
    assert_eq!(draft.compensation, CompensationMode::Barter);
    assert_eq!(draft.budget, None);
    assert_eq!(draft.task_count, 3);
}

#[test]
fn paid_campaign_with_budget_validates() {
    let mut form = filled_form();
    form.set_compensation(CompensationMode::Paid);
    form.set_budget("500".to_owned());
    let draft = form.validate().expect("paid form with budget should validate");
    assert_eq!(draft.budget, Some(500.0));
}

#[test]
fn blank_optional_fields_become_none() {
    let mut form = filled_form();
    form.set_requirements("   ".to_owned());
    form.set_description("Great campaign".to_owned());
    let draft = form.validate().expect("form should validate");
    assert_eq!(draft.requirements, None);
    assert_eq!(draft.campaign_description, Some("Great campaign".to_owned()));
}

#[test]
fn name_is_trimmed() {
    let mut form = filled_form();
    form.set_name("  Spaced Out  ".to_owned());
    let draft = form.validate().expect("form should validate");
    assert_eq!(draft.campaign_name, "Spaced Out");
}

// =============================================================
// Rejections
// =============================================================

#[test]
fn paid_campaign_without_budget_is_rejected() {
    let mut form = filled_form();
    form.set_compensation(CompensationMode::Paid);
    let err = form.validate().expect_err("paid without budget must fail");
    assert_eq!(err, ApiError::invalid("a budget is required for paid campaigns"));
}

#[test]
fn end_before_start_is_rejected() {
    let mut form = filled_form();
    form.set_start_date("2026-06-30".to_owned());
    form.set_end_date("2026-06-01".to_owned());
    let err = form.validate().expect_err("inverted dates must fail");
    assert_eq!(err, ApiError::invalid("end date must not be before the start date"));
}

#[test]
fn equal_start_and_end_dates_are_allowed() {
    let mut form = filled_form();
    form.set_start_date("2026-06-15".to_owned());
    form.set_end_date("2026-06-15".to_owned());
    assert!(form.validate().is_ok());
}

#[test]
fn empty_name_is_rejected() {
    let mut form = filled_form();
    form.set_name("   ".to_owned());
    assert!(form.validate().is_err());
}

#[test]
fn no_platforms_is_rejected() {
    let mut form = filled_form();
    form.toggle_platform(Platform::Instagram); // deselect the only one
    let err = form.validate().expect_err("empty platform set must fail");
    assert_eq!(err, ApiError::invalid("select at least one platform"));
}

#[test]
fn zero_task_count_is_rejected() {
    let mut form = filled_form();
    form.set_task_count("0".to_owned());
    assert!(form.validate().is_err());
}

#[test]
fn non_numeric_task_count_is_rejected() {
    let mut form = filled_form();
    form.set_task_count("three".to_owned());
    assert!(form.validate().is_err());
}

#[test]
fn negative_budget_is_rejected_for_paid() {
    let mut form = filled_form();
    form.set_compensation(CompensationMode::Paid);
    form.set_budget("-10".to_owned());
    assert!(form.validate().is_err());
}

// =============================================================
// Platform toggling
// =============================================================

#[test]
fn toggle_platform_selects_then_deselects() {
    let mut form = CampaignForm::default();
    form.toggle_platform(Platform::TikTok);
    assert!(form.has_platform(Platform::TikTok));
    form.toggle_platform(Platform::TikTok);
    assert!(!form.has_platform(Platform::TikTok));
}

#[test]
fn toggle_preserves_other_selections() {
    let mut form = CampaignForm::default();
    form.toggle_platform(Platform::Instagram);
    form.toggle_platform(Platform::YouTube);
    form.toggle_platform(Platform::Instagram);
    assert_eq!(form.platforms, vec![Platform::YouTube]);
}
