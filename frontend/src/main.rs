use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error;
mod modal;
mod access {
    pub mod form;
    pub mod binder;
    pub mod message;
    pub mod deep_link;
}
mod components {
    pub mod header;
    pub mod footer;
    pub mod demo_modal;
}
mod pages {
    pub mod landing;
    pub mod request_access;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        // Static hosts hand every path to index.html; show the landing page there too.
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Landing /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
