use super::*;

#[test]
fn google_form_links_are_detected() {
    assert!(is_google_form_link("https://docs.google.com/forms/d/e/abc/viewform"));
    assert!(is_google_form_link("https://forms.google.com/some-form"));
}

#[test]
fn other_links_are_not_form_links() {
    assert!(!is_google_form_link("https://docs.google.com/document/d/abc"));
    assert!(!is_google_form_link("mailto:hello@example.com"));
    assert!(!is_google_form_link("#contact"));
}

#[test]
fn embed_starts_loading_and_visible() {
    let status = EmbedStatus::default();
    assert_eq!(status, EmbedStatus::Loading);
    // The iframe may finish loading before hydration attaches `on:load`.
    assert!(!status.hides_container());
}

#[test]
fn load_hides_until_reveal() {
    let revealing = EmbedStatus::Loading.after_load();
    assert_eq!(revealing, EmbedStatus::Revealing);
    assert!(revealing.hides_container());

    let ready = revealing.after_reveal();
    assert_eq!(ready, EmbedStatus::Ready);
    assert!(!ready.hides_container());
}

#[test]
fn repeat_load_does_not_hide_a_ready_embed() {
    assert_eq!(EmbedStatus::Ready.after_load(), EmbedStatus::Ready);
    assert_eq!(EmbedStatus::Failed.after_load(), EmbedStatus::Failed);
    assert_eq!(EmbedStatus::Loading.after_reveal(), EmbedStatus::Loading);
    assert!(!EmbedStatus::Failed.hides_container());
}
