//! Cross-flow UI helpers: toast notifications and file-size formatting.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Displays a temporary notification at the bottom of the screen.
///
/// Creates a styled `div`, appends it to `<body>`, and removes it after a few
/// seconds. Used by the intake and edit flows to confirm saves and report
/// request failures without blocking the page.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Pretty-prints a file size for the selected-file line of the intake form.
pub fn format_file_size(bytes: u64) -> String {
    const KO: f64 = 1024.0;
    const MO: f64 = 1024.0 * 1024.0;
    let size = bytes as f64;
    if size >= MO {
        format!("{:.2} Mo", size / MO)
    } else if size >= KO {
        format!("{:.2} Ko", size / KO)
    } else {
        format!("{} o", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_sizes_stay_in_bytes() {
        assert_eq!(format_file_size(0), "0 o");
        assert_eq!(format_file_size(1023), "1023 o");
    }

    #[test]
    fn kilo_and_mega_sizes_use_two_decimals() {
        assert_eq!(format_file_size(1024), "1.00 Ko");
        assert_eq!(format_file_size(120_000), "117.19 Ko");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 Mo");
    }
}
