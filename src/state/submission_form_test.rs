use super::*;

fn filled_form() -> SubmissionForm {
    let mut form = SubmissionForm::default();
    form.set_campaign("camp-1".to_owned());
    let row_id = form.links[0].id.clone();
    form.set_link_url(&row_id, "https://instagram.com/p/1".to_owned());
    form
}

// =============================================================
// Row management
// =============================================================

#[test]
fn default_form_starts_with_one_row() {
    let form = SubmissionForm::default();
    assert_eq!(form.links.len(), 1);
    assert_eq!(form.links[0].platform, "Instagram");
}

#[test]
fn add_link_appends_a_fresh_row() {
    let mut form = SubmissionForm::default();
    form.add_link();
    assert_eq!(form.links.len(), 2);
    assert_ne!(form.links[0].id, form.links[1].id);
}

#[test]
fn remove_link_keeps_at_least_one_row() {
    let mut form = SubmissionForm::default();
    let only = form.links[0].id.clone();
    form.remove_link(&only);
    assert_eq!(form.links.len(), 1);
}

#[test]
fn remove_link_drops_the_matching_row() {
    let mut form = SubmissionForm::default();
    form.add_link();
    let first = form.links[0].id.clone();
    form.remove_link(&first);
    assert_eq!(form.links.len(), 1);
    assert_ne!(form.links[0].id, first);
}

#[test]
fn link_updates_target_the_right_row() {
    let mut form = SubmissionForm::default();
    form.add_link();
    let second = form.links[1].id.clone();
    form.set_link_url(&second, "https://youtube.com/watch?v=x".to_owned());
    form.set_link_platform(&second, "YouTube".to_owned());
    assert_eq!(form.links[0].url, "");
    assert_eq!(form.links[1].url, "https://youtube.com/watch?v=x");
    assert_eq!(form.links[1].platform, "YouTube");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_form_produces_draft() {
    let mut form = filled_form();
    form.set_notes("  posted with hashtags  ".to_owned());
    let draft = form.validate().expect("form should validate");
    assert_eq!(draft.campaign_id, "camp-1");
    assert_eq!(draft.links.len(), 1);
    assert_eq!(draft.notes, Some("posted with hashtags".to_owned()));
}

#[test]
fn missing_campaign_is_rejected() {
    let mut form = filled_form();
    form.set_campaign(String::new());
    let err = form.validate().expect_err("missing campaign must fail");
    assert_eq!(err, ApiError::invalid("select a campaign"));
}

#[test]
fn empty_link_url_is_rejected() {
    let mut form = filled_form();
    form.add_link();
    let err = form.validate().expect_err("blank link must fail");
    assert_eq!(err, ApiError::invalid("every content link needs a URL"));
}

#[test]
fn blank_notes_become_none() {
    let draft = filled_form().validate().expect("form should validate");
    assert_eq!(draft.notes, None);
}

#[test]
fn link_urls_are_trimmed_in_the_draft() {
    let mut form = filled_form();
    let row_id = form.links[0].id.clone();
    form.set_link_url(&row_id, "  https://tiktok.com/@u/video/1  ".to_owned());
    let draft = form.validate().expect("form should validate");
    assert_eq!(draft.links[0].url, "https://tiktok.com/@u/video/1");
}
