//! Contact form: validation, serialization, and the relay POST.
//!
//! One submission per click; re-entrancy is prevented by disabling the
//! submit button for the duration, not by an explicit lock. Any non-2xx
//! status counts as failure, uniformly. The form stays usable for a retry
//! after a failure (fields are not cleared).

use behavior::contact::{ENDPOINT, PENDING_LABEL, Payload};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, FormData, HtmlButtonElement, HtmlFormElement};

const FORM_ID: &str = "contactForm";
const SUBMIT_ID: &str = "submitButton";
const SUCCESS_ID: &str = "submitSuccessMessage";
const ERROR_ID: &str = "submitErrorMessage";
const VALIDATED_CLASS: &str = "was-validated";
const CONCEALED_CLASS: &str = "d-none";

/// Wire up the contact form. Only the form itself is required; button and
/// banners are refreshed when present.
pub fn init() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
    let Some(form) = document
        .get_element_by_id(FORM_ID)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    let button = document
        .get_element_by_id(SUBMIT_ID)
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    let success = document.get_element_by_id(SUCCESS_ID);
    let error = document.get_element_by_id(ERROR_ID);

    let submit = {
        let form = form.clone();
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            event.stop_propagation();
            on_submit(&form, button.as_ref(), success.as_ref(), error.as_ref());
        })
    };
    let _ = form.add_event_listener_with_callback("submit", submit.as_ref().unchecked_ref());
    submit.forget();
}

fn on_submit(
    form: &HtmlFormElement,
    button: Option<&HtmlButtonElement>,
    success: Option<&Element>,
    error: Option<&Element>,
) {
    // Built-in validation first; invalid forms surface inline errors and
    // never reach the network.
    if !form.check_validity() {
        let _ = form.class_list().add_1(VALIDATED_CLASS);
        return;
    }
    let _ = form.class_list().remove_1(VALIDATED_CLASS);

    set_banner(success, false);
    set_banner(error, false);

    let original_label = button.and_then(|b| b.text_content());
    if let Some(button) = button {
        button.set_disabled(true);
        button.set_text_content(Some(PENDING_LABEL));
    }

    let payload = read_payload(form);
    let form = form.clone();
    let button = button.cloned();
    let success = success.cloned();
    let error = error.cloned();
    spawn_local(async move {
        match submit(&payload).await {
            Ok(()) => {
                form.reset();
                set_banner(success.as_ref(), true);
            }
            Err(err) => {
                log::error!("contact form submission failed: {err}");
                set_banner(error.as_ref(), true);
            }
        }
        if let Some(button) = &button {
            button.set_disabled(false);
            button.set_text_content(original_label.as_deref());
        }
    });
}

/// Collect the form's entries into the relay payload.
fn read_payload(form: &HtmlFormElement) -> Payload {
    let mut fields = Vec::new();
    if let Ok(data) = FormData::new_with_form(form) {
        if let Ok(Some(entries)) = js_sys::try_iter(&data.entries()) {
            for entry in entries.flatten() {
                let pair = js_sys::Array::from(&entry);
                let name = pair.get(0).as_string().unwrap_or_default();
                let value = pair.get(1).as_string().unwrap_or_default();
                fields.push((name, value));
            }
        }
    }
    Payload::from_fields(fields)
}

/// Single POST to the relay; only the HTTP status is inspected.
async fn submit(payload: &Payload) -> Result<(), String> {
    let request = gloo_net::http::Request::post(ENDPOINT)
        .header("Accept", "application/json")
        .json(payload)
        .map_err(|e| e.to_string())?;
    let response = request.send().await.map_err(|e| e.to_string())?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("relay returned status {}", response.status()))
    }
}

/// Show or hide a success/error banner via the `d-none` utility class.
fn set_banner(banner: Option<&Element>, shown: bool) {
    if let Some(banner) = banner {
        let _ = banner.class_list().toggle_with_force(CONCEALED_CLASS, !shown);
    }
}
