use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod config;
mod sections;

mod components {
    pub mod animated_number;
    pub mod cta_button;
    pub mod footer;
    pub mod navbar;
    pub mod service_page;
}
mod pages {
    pub mod auto_parts;
    pub mod aviation_parts;
    pub mod heavy_machinery;
    pub mod home;
    pub mod not_found;
}

use components::footer::Footer;
use components::navbar::Navbar;
use pages::auto_parts::AutoParts;
use pages::aviation_parts::AviationParts;
use pages::heavy_machinery::HeavyMachinery;
use pages::home::Home;
use pages::not_found::NotFound;
use sections::ScrollIntent;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services/auto-parts")]
    AutoParts,
    #[at("/services/aviation-parts")]
    AviationParts,
    #[at("/services/heavy-machinery")]
    HeavyMachinery,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::AutoParts => {
            info!("Rendering Auto Parts page");
            html! { <AutoParts /> }
        }
        Route::AviationParts => {
            info!("Rendering Aviation Parts page");
            html! { <AviationParts /> }
        }
        Route::HeavyMachinery => {
            info!("Rendering Heavy Machinery page");
            html! { <HeavyMachinery /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

// Reset the viewport on every navigation.
#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let route = use_route::<Route>();
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        route,
    );
    html! {}
}

#[function_component]
fn App() -> Html {
    let scroll_intent = use_state(ScrollIntent::default);

    html! {
        <BrowserRouter>
            <ContextProvider<ScrollIntent> context={(*scroll_intent).clone()}>
                <ScrollToTop />
                <Navbar />
                <main class="page-main">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </ContextProvider<ScrollIntent>>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_map_to_their_pages() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/services/auto-parts"), Some(Route::AutoParts));
        assert_eq!(
            Route::recognize("/services/aviation-parts"),
            Some(Route::AviationParts)
        );
        assert_eq!(
            Route::recognize("/services/heavy-machinery"),
            Some(Route::HeavyMachinery)
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/services/submarines"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
    }
}
