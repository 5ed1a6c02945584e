//! Leptos Context Menu Utilities
//!
//! Right-click menus for Leptos using plain mouse events.
//! The menu only tracks visibility and placement; callers record what
//! was right-clicked through the `on_open` callback.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Context menu state signals
#[derive(Clone, Copy)]
pub struct MenuSignals {
    pub open_read: ReadSignal<bool>,
    pub open_write: WriteSignal<bool>,
    /// Pointer position (page coordinates) of the last right-click
    pub x_read: ReadSignal<i32>,
    pub x_write: WriteSignal<i32>,
    pub y_read: ReadSignal<i32>,
    pub y_write: WriteSignal<i32>,
}

pub fn create_menu_signals() -> MenuSignals {
    let (open_read, open_write) = signal(false);
    let (x_read, x_write) = signal(0i32);
    let (y_read, y_write) = signal(0i32);
    MenuSignals {
        open_read,
        open_write,
        x_read,
        x_write,
        y_read,
        y_write,
    }
}

/// Show the menu at (x, y)
pub fn open_menu(menu: &MenuSignals, x: i32, y: i32) {
    menu.x_write.set(x);
    menu.y_write.set(y);
    menu.open_write.set(true);
}

/// Hide the menu
pub fn close_menu(menu: &MenuSignals) {
    menu.open_write.set(false);
}

/// Inline style placing the menu overlay at the pointer
pub fn overlay_style(x: i32, y: i32, open: bool) -> String {
    let display = if open { "block" } else { "none" };
    format!("position: absolute; top: {}px; left: {}px; display: {};", y, x, display)
}

/// Reactive overlay style for `menu`
pub fn make_overlay_style(menu: MenuSignals) -> impl Fn() -> String + Copy + 'static {
    move || overlay_style(menu.x_read.get(), menu.y_read.get(), menu.open_read.get())
}

/// Create contextmenu handler for a right-clickable element.
/// Suppresses the browser menu, runs `on_open`, then opens ours at the pointer.
pub fn make_on_contextmenu<F>(menu: MenuSignals, on_open: F) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    F: Fn() + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        on_open();
        open_menu(&menu, ev.page_x(), ev.page_y());
    }
}

/// Create mousedown handler that stops shift+mousedown from starting a
/// native text selection. Selection state is left to the click handler.
pub fn make_on_shift_mousedown() -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.shift_key() {
            ev.prevent_default();
        }
    }
}

/// Whether an event target sits inside an element matching `selector`
pub fn is_inside(target: Option<web_sys::EventTarget>, selector: &str) -> bool {
    target
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

/// Bind global click handler that hides the menu when clicking outside
/// the element matched by `menu_selector`
pub fn bind_global_click_dismiss(menu: MenuSignals, menu_selector: &'static str) {
    use wasm_bindgen::closure::Closure;

    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if !menu.open_read.get_untracked() {
            return;
        }
        if !is_inside(ev.target(), menu_selector) {
            close_menu(&menu);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
    }
    on_click.forget();
}

/// Whether a keydown's `key` value names `key`. Modified presses
/// (ctrl/alt/meta held) do not count.
pub fn is_plain_key(pressed: &str, ctrl: bool, alt: bool, meta: bool, key: &str) -> bool {
    pressed == key && !ctrl && !alt && !meta
}

/// Bind global keydown handler that runs `on_key` when `key` is pressed
/// without ctrl/alt/meta
pub fn bind_global_keydown<F>(key: &'static str, on_key: F)
where
    F: Fn() + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if is_plain_key(&ev.key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key(), key) {
            on_key();
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
    }
    on_keydown.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_style_open() {
        assert_eq!(
            overlay_style(40, 120, true),
            "position: absolute; top: 120px; left: 40px; display: block;"
        );
    }

    #[test]
    fn test_overlay_style_closed_keeps_position() {
        let style = overlay_style(7, 9, false);
        assert!(style.contains("top: 9px"));
        assert!(style.contains("left: 7px"));
        assert!(style.ends_with("display: none;"));
    }

    #[test]
    fn test_is_inside_without_target() {
        assert!(!is_inside(None, "#context-menu"));
    }

    #[test]
    fn test_is_plain_key() {
        assert!(is_plain_key("Escape", false, false, false, "Escape"));
        assert!(!is_plain_key("Escape", true, false, false, "Escape"));
        assert!(!is_plain_key("Enter", false, false, false, "Escape"));
    }
}
