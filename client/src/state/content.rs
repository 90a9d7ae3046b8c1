//! Static site copy (projects, skills, services, chat suggestions).
//!
//! DESIGN
//! ======
//! Copy lives in `content/site.json` and is compiled into the bundle, so
//! editing the portfolio never touches component code. A malformed file
//! degrades to an empty site rather than failing hydration.

use serde::Deserialize;

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

const SITE_JSON: &str = include_str!("../../content/site.json");

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SiteContent {
    pub owner: String,
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
    #[serde(default)]
    pub contact: Contact,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillGroup {
    pub group: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub live_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
}

/// Quick-question button shown in the chat widget.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Suggestion {
    pub label: String,
    pub question: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Contact {
    pub form_embed_url: Option<String>,
    pub form_link_url: Option<String>,
    pub email: Option<String>,
}

impl SiteContent {
    /// Parse site copy from JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `raw` is not valid site JSON.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The bundled site copy, or an empty site if it fails to parse.
    pub fn bundled() -> Self {
        Self::parse(SITE_JSON).unwrap_or_else(|e| {
            log::error!("bundled site content is invalid: {e}");
            Self::default()
        })
    }
}
