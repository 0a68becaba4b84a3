use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content;

/// Static anchor-link navigation. The call to action jumps to the
/// lead-capture section the same way the nav link does.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let go_to_request_access = Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .location()
                .set_href(&format!("#{}", content::LEAD_CAPTURE_ID));
        }
    });

    html! {
        <nav class="navbar">
            <div class="logo">{"LUNE CAPITAL"}</div>
            <div class="nav-links">
                {
                    for content::nav_links().iter().map(|link| html! {
                        <a href={format!("#{}", link.target)}>{link.label}</a>
                    })
                }
                <button class="btn-primary" onclick={go_to_request_access}>
                    {"Request Access"}
                </button>
            </div>
        </nav>
    }
}
