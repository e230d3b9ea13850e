mod app;
mod charts;
mod content;
mod ui_state;
mod viewport;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::logging::log!("parkinson-interactivo: mounting");
    mount_to_body(|| view! { <App /> });
}
