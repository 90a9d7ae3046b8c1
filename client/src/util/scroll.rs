//! Scroll position math and smooth-scroll helpers.
//!
//! The pure functions decide which section is active, whether the
//! scroll-to-top button shows, and where anchor jumps land. The hydrate-only
//! helpers read layout from the DOM and issue `window.scrollTo`.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Distance below the viewport top used to probe for the current section.
pub const SECTION_PROBE_OFFSET: f64 = 100.0;

/// Scroll depth after which the scroll-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;

/// Layout of one `<section>` in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Id of the section under `scroll_y + SECTION_PROBE_OFFSET`.
///
/// When sections overlap, the last one in document order wins. A winning
/// section without an id leaves no section active.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let probe = scroll_y + SECTION_PROBE_OFFSET;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(probe))
        .map(|s| s.id.as_str())
        .filter(|id| !id.is_empty())
}

/// Whether a nav link `href` points at the active section.
pub fn is_active_link(href: &str, active: Option<&str>) -> bool {
    match (href.strip_prefix('#'), active) {
        (Some(id), Some(active)) => id == active,
        _ => false,
    }
}

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// Anchor id for an in-page link, or `None` for bare `#` and external links.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Window offset that puts a target just below the fixed header.
pub fn anchor_scroll_top(target_top: f64, header_height: f64) -> f64 {
    target_top - header_height
}

/// Current `window.scrollY`.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smoothly scroll the window to `top`.
pub fn smooth_scroll_to(top: f64) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = top;
    }
}

/// Smoothly scroll to the element with `id`, leaving room for the `.nav` header.
///
/// Missing targets are ignored.
pub fn scroll_to_anchor(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(target) = doc
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            log::debug!("anchor target #{id} not found");
            return;
        };
        let header_height = doc
            .query_selector(".nav")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map_or(0.0, |nav| f64::from(nav.offset_height()));
        smooth_scroll_to(anchor_scroll_top(f64::from(target.offset_top()), header_height));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Collect bounds for every `<section>` in document order; unnamed ones keep an empty id.
pub fn section_bounds() -> Vec<SectionBounds> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let Ok(nodes) = doc.query_selector_all("section") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| SectionBounds {
                id: el.id(),
                top: f64::from(el.offset_top()),
                height: f64::from(el.client_height()),
            })
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}
