//! Page wiring
//!
//! Binds the converter page's controls to the session:
//!
//! - `#sro`, `#syl`: the two textareas
//! - `double-vowels`: checkbox enabling the doubled-vowel rule
//! - `macrons`: radio group, value `"true"` for macrons
//! - `#settings`: `<details>` panel opened by navigating to `#settings`

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, EventTarget, HtmlDetailsElement, HtmlInputElement, HtmlTextAreaElement, Window,
};

use crate::api::converter::JsTransliterator;
use crate::api::fragment::location_hash;
use crate::api::helpers::{
    char_to_utf16_index, deserialize, install_session, is_mounted, serialize, with_session,
};
use crate::models::buffers::{Authority, BufferId};
use crate::models::settings::{LongAccents, Settings};
use crate::session::{EditorSession, InitResult};
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

#[derive(Clone)]
struct PageElements {
    window: Window,
    sro: HtmlTextAreaElement,
    syl: HtmlTextAreaElement,
    double_vowels: Option<HtmlInputElement>,
    macrons: Vec<HtmlInputElement>,
    settings: Option<HtmlDetailsElement>,
}

fn textarea(document: &Document, id: &str) -> Result<HtmlTextAreaElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing #{} textarea", id)))?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not a textarea", id)))
}

fn inputs_named(document: &Document, name: &str) -> Vec<HtmlInputElement> {
    let nodes = document.get_elements_by_name(name);
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        .collect()
}

/// Attach a listener that lives as long as the page
fn listen<F>(target: &EventTarget, event: &str, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) -> Result<(), JsValue> + 'static,
{
    let name = event.to_string();
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        if let Err(err) = handler(event) {
            wasm_error!("{} handler failed: {:?}", name, err);
        }
    });
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

impl PageElements {
    fn find() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        Ok(Self {
            sro: textarea(&document, BufferId::Sro.key())?,
            syl: textarea(&document, BufferId::Syl.key())?,
            double_vowels: inputs_named(&document, "double-vowels").into_iter().next(),
            macrons: inputs_named(&document, "macrons"),
            settings: document
                .get_element_by_id("settings")
                .and_then(|el| el.dyn_into::<HtmlDetailsElement>().ok()),
            window,
        })
    }

    fn checked_long_accents(&self) -> Option<LongAccents> {
        self.macrons
            .iter()
            .find(|button| button.checked())
            .map(|button| LongAccents::from_radio_value(&button.value()))
    }

    fn write_back(&self, sro: &str, syl: &str) {
        self.sro.set_value(sro);
        self.syl.set_value(syl);
    }

    fn install_listeners(&self) -> Result<(), JsValue> {
        let page = self.clone();
        listen(&self.sro, "input", move |_| {
            let value = page.sro.value();
            let (result, syl) = with_session(|session| {
                let result = session.on_sro_input(&value);
                Ok((result, session.value(BufferId::Syl).to_string()))
            })?;

            if result.handled {
                page.sro.set_value(&result.text);
                if let Some(cursor) = result.cursor {
                    let at = char_to_utf16_index(&result.text, cursor);
                    page.sro.set_selection_range(at, at)?;
                }
            }
            page.syl.set_value(&syl);
            Ok(())
        })?;

        let page = self.clone();
        listen(&self.syl, "input", move |_| {
            let value = page.syl.value();
            let sro = with_session(|session| Ok(session.on_syl_input(&value)))?;
            page.sro.set_value(&sro);
            Ok(())
        })?;

        if let Some(checkbox) = &self.double_vowels {
            let target = checkbox.clone();
            listen(checkbox, "change", move |_| {
                let enabled = target.checked();
                wasm_log!("double vowels: {}", enabled);
                with_session(|session| {
                    session.set_double_vowels(enabled);
                    Ok(())
                })
            })?;
        }

        for button in &self.macrons {
            let page = self.clone();
            listen(button, "input", move |_| {
                let Some(long_accents) = page.checked_long_accents() else {
                    return Ok(());
                };
                let sro = with_session(|session| Ok(session.set_long_accents(long_accents)))?;
                page.sro.set_value(&sro);
                Ok(())
            })?;
        }

        let page = self.clone();
        listen(&self.window, "hashchange", move |_| {
            let hash = page.window.location().hash()?;
            match with_session(|session| Ok(session.on_hash_change(&hash)))? {
                Ok(change) => {
                    if change.open_settings {
                        if let Some(details) = &page.settings {
                            details.set_open(true);
                        }
                    }
                    page.write_back(&change.sro, &change.syl);
                }
                Err(err) => wasm_warn!("ignoring location fragment: {}", err),
            }
            Ok(())
        })?;

        Ok(())
    }
}

/// Bind the page controls and restore state from the location.
///
/// `settings` is optional (`{ doubleVowels, longAccents }`); the controls'
/// current state takes precedence over it. Returns the load-time
/// `{ authority, sro, syl }`.
///
/// A page mounts once. Later calls throw without touching the controls or
/// adding listeners.
#[wasm_bindgen(js_name = mountPage)]
pub fn mount_page(settings: JsValue) -> Result<JsValue, JsValue> {
    if is_mounted()? {
        wasm_warn!("mountPage called twice, keeping the first session");
        return Err(JsValue::from_str("Page already mounted"));
    }

    let page = PageElements::find()?;

    let mut settings: Settings = if settings.is_undefined() || settings.is_null() {
        Settings::default()
    } else {
        deserialize(settings, "Invalid settings")?
    };
    if let Some(checkbox) = &page.double_vowels {
        settings.double_vowels = checkbox.checked();
    }
    if let Some(long_accents) = page.checked_long_accents() {
        settings.long_accents = long_accents;
    }

    let mut session = EditorSession::new(JsTransliterator::default(), settings);
    session.set_values(&page.sro.value(), &page.syl.value());

    let init = match session.initialize(&location_hash()?) {
        Ok(init) => init,
        Err(err) => {
            wasm_warn!("ignoring location fragment: {}", err);
            InitResult {
                authority: Authority::None,
                sro: session.value(BufferId::Sro).to_string(),
                syl: session.value(BufferId::Syl).to_string(),
            }
        }
    };

    page.write_back(&init.sro, &init.syl);
    install_session(session)?;
    page.install_listeners()?;

    wasm_info!("page mounted, authority: {:?}", init.authority);
    serialize(&init, "Serialization error")
}

/// JSON conversion request: `{"sro": ..}` or `{"syl": ..}`
#[wasm_bindgen(js_name = handleRequest)]
pub fn handle_request(request: &str) -> Result<String, JsValue> {
    with_session(|session| Ok(session.handle_request(request)))
}

/// Version of the loaded conversion library
#[wasm_bindgen(js_name = libraryVersion)]
pub fn library_version() -> Option<String> {
    JsTransliterator::default().version()
}
