//! Small browser DOM helpers shared by components.
//!
//! Every helper is a no-op (or returns a neutral value) outside the browser.

/// Whether `ev` originated inside any of `roots`.
///
/// Roots that are not mounted are skipped.
#[cfg(feature = "hydrate")]
pub fn event_within(ev: &web_sys::Event, roots: &[Option<web_sys::Element>]) -> bool {
    use wasm_bindgen::JsCast;

    let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
        return false;
    };
    roots.iter().flatten().any(|root| root.contains(Some(&target)))
}

/// Set or clear `overflow: hidden` on `<body>`.
pub fn lock_body_scroll(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(e) = result {
            log::debug!("body scroll lock failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

/// Current calendar year from the browser clock.
pub fn current_year() -> Option<u32> {
    #[cfg(feature = "hydrate")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
