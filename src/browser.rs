//! Browser Helpers
//!
//! Thin wrappers over `web_sys` for alerts, reloads and scrolling.

/// Non-blocking in the sense that failures to show it are ignored
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Reload the page, re-running the initial load from scratch
pub fn reload_page() {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().reload() {
            web_sys::console::error_1(&format!("[BROWSER] Reload failed: {:?}", e).into());
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// New scroll offset after moving one page. The browser clamps the result.
pub fn page_scroll_offset(current: i32, page_height: i32, direction: ScrollDirection) -> i32 {
    match direction {
        ScrollDirection::Up => current - page_height,
        ScrollDirection::Down => current + page_height,
    }
}

/// Scroll `el` by its own visible height
pub fn scroll_by_page(el: &web_sys::Element, direction: ScrollDirection) {
    el.set_scroll_top(page_scroll_offset(el.scroll_top(), el.client_height(), direction));
}
