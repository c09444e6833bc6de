mod animation;
mod app;
mod card;
mod chrome;
mod colors;
mod icons;
mod loader;
mod popup;
mod timeline;

use leptos::mount::mount_to;
use wasm_bindgen::JsCast;

/// Element in `index.html` the team page renders into.
const MOUNT_ELEMENT_ID: &str = "team-page";

fn main() {
    console_error_panic_hook::set_once();
    let Some(target) = mount_target() else {
        web_sys::console::error_1(&"team page: no document to mount into".into());
        return;
    };
    // The page lives for the whole document; the handle is never dropped.
    mount_to(target, app::App).forget();
}

fn mount_target() -> Option<web_sys::HtmlElement> {
    let document = web_sys::window()?.document()?;
    document
        .get_element_by_id(MOUNT_ELEMENT_ID)
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .or_else(|| {
            web_sys::console::warn_1(
                &format!("#{MOUNT_ELEMENT_ID} not found, mounting team page on <body>").into(),
            );
            document.body()
        })
}
