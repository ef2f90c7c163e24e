use super::*;

#[test]
fn begin_blocks_second_submission() {
    let mut form = FormStatus::default();
    assert!(form.begin());
    assert!(!form.begin());
    assert!(form.submitting);
}

#[test]
fn begin_clears_previous_banner() {
    let mut form = FormStatus { submitting: false, banner: Banner::Error("old".to_owned()) };
    form.begin();
    assert_eq!(form.banner, Banner::None);
}

#[test]
fn finish_reports_success_or_error() {
    let mut form = FormStatus::default();
    form.begin();
    form.finish(&Ok::<(), ApiError>(()), "Saved");
    assert!(!form.submitting);
    assert_eq!(form.banner, Banner::Success("Saved".to_owned()));

    form.begin();
    form.finish(&Err::<(), _>(ApiError::new("invalid-subscription-code")), "Saved");
    assert_eq!(form.banner, Banner::Error("invalid-subscription-code".to_owned()));
}

#[test]
fn quiet_finish_only_shows_errors() {
    let mut form = FormStatus::default();
    form.begin();
    form.finish_quiet(&Ok::<u8, ApiError>(1));
    assert_eq!(form.banner, Banner::None);
}

#[test]
fn dismiss_hides_banner() {
    let mut form = FormStatus::default();
    form.reject("Email is required");
    assert_eq!(form.banner, Banner::Error("Email is required".to_owned()));
    form.dismiss();
    assert_eq!(form.banner, Banner::None);
}

#[test]
fn reject_leaves_pending_submission_alone() {
    let mut form = FormStatus::default();
    form.begin();
    form.reject("Email is required");
    assert!(form.submitting);
    assert_eq!(form.banner, Banner::None);

    form.finish(&Err::<(), _>(ApiError::new("down")), "Saved");
    form.reject("Email is required");
    assert!(!form.submitting);
    assert_eq!(form.banner, Banner::Error("Email is required".to_owned()));
}
