//! Canned-response classification for the chat widget.
//!
//! DESIGN
//! ======
//! Responses are picked from an ordered rule table rather than an if/else
//! chain. Evaluation is first-match-wins with no scoring, so table order is
//! the priority order.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

/// A group of trigger keywords bound to one response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

impl KeywordRule {
    /// Whether any keyword is a substring of `haystack`.
    ///
    /// `haystack` is expected to be lower-cased already.
    pub fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|kw| haystack.contains(kw))
    }
}

pub const FRONTEND_RESPONSE: &str = "I specialize in modern frontend development with React, JavaScript, and responsive CSS. My focus is on creating clean, performant user interfaces.";
pub const PROJECTS_RESPONSE: &str = "I've built various frontend projects including real estate websites, e-commerce UIs, data dashboards, and task management apps. Check out my projects section!";
pub const SKILLS_RESPONSE: &str = "My technical skills include HTML5, CSS3, JavaScript (ES6+), React, responsive design, performance optimization, and accessibility best practices.";
pub const SERVICES_RESPONSE: &str = "I offer custom website development, responsive design implementation, performance optimization, and UI development from design files.";
pub const REAL_ESTATE_RESPONSE: &str = "Yes! I built a modern real estate website with property listings and filtering. You can view it live at https://isreal1.netlify.app/";
pub const DEFAULT_RESPONSE: &str =
    "I'm here to discuss frontend development work. You can ask about my projects, skills, or services.";

/// Rule table in priority order.
pub const RULES: &[KeywordRule] = &[
    KeywordRule { keywords: &["frontend", "react", "javascript"], response: FRONTEND_RESPONSE },
    KeywordRule { keywords: &["project", "work"], response: PROJECTS_RESPONSE },
    KeywordRule { keywords: &["skill", "technology"], response: SKILLS_RESPONSE },
    KeywordRule { keywords: &["service", "hire"], response: SERVICES_RESPONSE },
    KeywordRule { keywords: &["real estate", "isreal"], response: REAL_ESTATE_RESPONSE },
];

/// Return the value of the first entry for which `pred` holds.
pub fn first_match<'a, T, V>(
    entries: &'a [T],
    mut pred: impl FnMut(&T) -> bool,
    value: impl Fn(&'a T) -> V,
) -> Option<V> {
    entries.iter().find(|entry| pred(*entry)).map(value)
}

/// Classify free text against `rules`, falling back to `default`.
pub fn classify_with(input: &str, rules: &[KeywordRule], default: &'static str) -> &'static str {
    let lowered = input.to_lowercase();
    first_match(rules, |rule| rule.matches(&lowered), |rule| rule.response).unwrap_or(default)
}

/// Classify free text against the site's rule table.
pub fn classify(input: &str) -> &'static str {
    classify_with(input, RULES, DEFAULT_RESPONSE)
}
