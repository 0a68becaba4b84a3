use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use log::info;

use crate::config;
use crate::content;
use crate::mail::MailIntent;

/// Two-field "request access" form. Both fields carry the native
/// `required` attribute, so the browser blocks submission while either
/// one is empty and the handler below only ever sees populated input.
/// Submitting builds a `mailto:` URI and hands it to the browser; whether
/// a mail client actually picks it up is not observable from here.
#[function_component(LeadCaptureForm)]
pub fn lead_capture_form() -> Html {
    let name = use_state(String::new);
    let message = use_state(String::new);

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_message_input = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(textarea.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let intent =
                MailIntent::access_request(config::admin_contact_address(), &name, &message);
            info!("Dispatching access request mail intent");
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&intent.to_uri());
            }
        })
    };

    html! {
        <section id={content::LEAD_CAPTURE_ID} class="request-access">
            <h2>{"Ready to take control?"}</h2>
            <p>{"Request an invite to start self-hosting Lune Capital today."}</p>

            <form class="access-form" onsubmit={onsubmit}>
                <div class="form-group">
                    <label for="lead-name">{"Full Name"}</label>
                    <input
                        id="lead-name"
                        type="text"
                        placeholder="John Doe"
                        required=true
                        value={(*name).clone()}
                        oninput={on_name_input}
                    />
                </div>
                <div class="form-group">
                    <label for="lead-message">{"Message"}</label>
                    <textarea
                        id="lead-message"
                        rows="4"
                        placeholder="Tell us about your setup and why you're interested in Lune Capital..."
                        required=true
                        value={(*message).clone()}
                        oninput={on_message_input}
                    />
                </div>
                <button type="submit" class="btn-primary">
                    <i class="fa-solid fa-envelope"></i>
                    {" Send Access Request"}
                </button>
            </form>
        </section>
    }
}
