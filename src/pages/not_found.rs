use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Terminal view for unknown paths.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{ "404" }</h1>
            <p>{ "The page you are looking for does not exist." }</p>
            <Link<Route> to={Route::Home} classes="cta-dark">
                { "Back to Home" }
            </Link<Route>>
        </div>
    }
}
