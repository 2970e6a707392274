use web_sys as web;

const INSTRUCTIONS_ID: &str = "instructions";
const MUTE_BUTTON_ID: &str = "mute-button";

#[inline]
fn set_hidden(document: &web::Document, id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        if hidden {
            let _ = cl.add_1("hidden");
        } else {
            let _ = cl.remove_1("hidden");
        }
    }
}

/// Fade the key hints out and reveal the mute toggle once the user has
/// interacted.
pub fn on_first_interaction(document: &web::Document) {
    set_hidden(document, INSTRUCTIONS_ID, true);
    set_hidden(document, MUTE_BUTTON_ID, false);
}

pub fn show_muted(document: &web::Document, muted: bool) {
    if let Some(el) = document.get_element_by_id(MUTE_BUTTON_ID) {
        let cl = el.class_list();
        if muted {
            let _ = cl.add_1("muted");
        } else {
            let _ = cl.remove_1("muted");
        }
        let _ = el.set_attribute("aria-pressed", if muted { "true" } else { "false" });
        el.set_text_content(Some(if muted { "Unmute" } else { "Mute" }));
    }
}

pub fn mute_button_id() -> &'static str {
    MUTE_BUTTON_ID
}
