use super::*;
use crate::chat::rules::{PROJECTS_RESPONSE, SERVICES_RESPONSE, SKILLS_RESPONSE, classify};

#[test]
fn bundled_content_parses() {
    let content = SiteContent::parse(SITE_JSON).unwrap();
    assert!(!content.owner.is_empty());
    assert!(!content.projects.is_empty());
    assert_eq!(content, SiteContent::bundled());
}

#[test]
fn parse_fills_missing_lists_with_defaults() {
    let content = SiteContent::parse(r#"{"owner":"A","tagline":"B"}"#).unwrap();
    assert_eq!(content.owner, "A");
    assert!(content.projects.is_empty());
    assert!(content.suggestions.is_empty());
    assert_eq!(content.contact, Contact::default());
}

#[test]
fn parse_rejects_malformed_json() {
    assert!(SiteContent::parse("{").is_err());
    assert!(SiteContent::parse(r#"{"tagline":"no owner"}"#).is_err());
}

#[test]
fn bundled_suggestions_hit_their_intended_rules() {
    let content = SiteContent::bundled();
    let answers: Vec<&str> = content.suggestions.iter().map(|s| classify(&s.question)).collect();
    assert_eq!(answers, [SKILLS_RESPONSE, PROJECTS_RESPONSE, SERVICES_RESPONSE]);
}

#[test]
fn real_estate_project_has_live_link() {
    let content = SiteContent::bundled();
    let project = content
        .projects
        .iter()
        .find(|p| p.title.contains("Real Estate"))
        .unwrap();
    assert_eq!(project.live_url.as_deref(), Some("https://isreal1.netlify.app/"));
}
