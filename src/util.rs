// Formatting, randomness and small DOM helpers shared across components

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Uniform index into a slice of the given length.
pub fn rand_index(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let drawn = (js_sys::Math::random() * len as f64).floor() as usize;
    drawn.min(len - 1)
}

/// Uniform draw from lo..=hi.
pub fn rand_between(lo: u32, hi: u32) -> u32 {
    let span = (hi - lo + 1) as f64;
    let drawn = (js_sys::Math::random() * span).floor() as u32;
    lo + drawn.min(hi - lo)
}

pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn countdown_parts(ms: u64) -> (u64, u64, u64) {
    let days = ms / (24 * 60 * 60 * 1000);
    let hours = (ms % (24 * 60 * 60 * 1000)) / (60 * 60 * 1000);
    let minutes = (ms % (60 * 60 * 1000)) / (60 * 1000);
    (days, hours, minutes)
}

pub fn format_countdown_long(ms: u64) -> String {
    let (days, hours, minutes) = countdown_parts(ms);
    format!("{}d {}h {}m", days, hours, minutes)
}

pub fn format_countdown_short(ms: u64) -> String {
    let (days, hours, _) = countdown_parts(ms);
    format!("{}d {}h", days, hours)
}

/// Smooth-scrolls the viewport to the element with the given id.
pub fn scroll_to(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(el) = document.get_element_by_id(id) else {
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Tilts a card toward the cursor. Writes the element style directly so
/// pointer movement never re-renders.
pub fn tilt_card(e: &MouseEvent) {
    let Some(el) = e
        .current_target()
        .and_then(|t| t.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let rect = el.get_bounding_client_rect();
    let x = e.client_x() as f64 - rect.left();
    let y = e.client_y() as f64 - rect.top();
    let rotate_x = (y - rect.height() / 2.0) / 10.0;
    let rotate_y = (rect.width() / 2.0 - x) / 10.0;
    let transform = format!("perspective(1000px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg)");
    let _ = el.style().set_property("transform", &transform);
}

pub fn reset_tilt(e: &MouseEvent) {
    let Some(el) = e
        .current_target()
        .and_then(|t| t.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let _ = el
        .style()
        .set_property("transform", "perspective(1000px) rotateX(0deg) rotateY(0deg)");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(247), "247");
        assert_eq!(format_thousands(1842), "1,842");
        assert_eq!(format_thousands(1843), "1,843");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn countdown_formats_both_granularities() {
        let ms = 2 * 24 * 60 * 60 * 1000 + 14 * 60 * 60 * 1000;
        assert_eq!(format_countdown_long(ms), "2d 14h 0m");
        assert_eq!(format_countdown_short(ms), "2d 14h");

        let mid = ms - 23 * 60 * 1000 - 45 * 1000;
        assert_eq!(format_countdown_long(mid), "2d 13h 36m");
        assert_eq!(format_countdown_short(mid), "2d 13h");
    }

    #[test]
    fn countdown_at_zero_reads_expired() {
        assert_eq!(format_countdown_long(0), "0d 0h 0m");
        assert_eq!(format_countdown_short(0), "0d 0h");
    }
}
