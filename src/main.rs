use log::{info, Level};
use yew::prelude::*;

mod config;
mod content;
mod observer;

mod controllers {
    pub mod count_up;
    pub mod scroll_spy;
    pub mod tabs;
    pub mod visibility;
}

mod components {
    pub mod count_up;
    pub mod footer;
    pub mod milestones;
    pub mod navbar;
    pub mod quote_form;
    pub mod reveal;
    pub mod services_tabs;
}

mod pages {
    pub mod home;
}

use components::navbar::Navbar;
use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Navbar />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Akwaba Construction site");
    yew::Renderer::<App>::new().render();
}
