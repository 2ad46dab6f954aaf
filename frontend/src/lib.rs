use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod error;
pub mod utils {
    pub mod api;
    pub mod listener;
}
pub mod effects {
    pub mod phrase_cycler;
    pub mod pointer;
    pub mod local_time;
    pub mod smooth_scroll;
}
pub mod data {
    pub mod projects;
    pub mod services;
    pub mod tech_stack;
}
pub mod contact {
    pub mod draft;
    pub mod transport;
    pub mod form;
}
pub mod components {
    pub mod typewriter;
    pub mod hero;
    pub mod service_pillars;
    pub mod project_modal;
    pub mod portfolio_grid;
    pub mod tech_constellation;
    pub mod contact_section;
}
pub mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::home::Home;
use pages::not_found::NotFound;

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
        Route::Home => html! { <Home /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
