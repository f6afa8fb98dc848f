use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <Link<Route> to={Route::Home} classes="footer-logo">
                            <img src="/assets/partsform-logo.png" alt="PARTSFORM" />
                        </Link<Route>>
                        <p>
                            { "Global parts trading redefined with clarity, speed & trusted \
                               reach across automotive, aviation and industrial ecosystems." }
                        </p>
                    </div>

                    <div class="footer-column">
                        <h4>{ "Platform" }</h4>
                        <ul>
                            <li>
                                <Link<Route> to={Route::Home} classes="footer-link">
                                    { "Home" }
                                </Link<Route>>
                            </li>
                            <li>
                                <Link<Route> to={Route::AutoParts} classes="footer-link">
                                    { "Auto Parts" }
                                </Link<Route>>
                            </li>
                            <li>
                                <Link<Route> to={Route::AviationParts} classes="footer-link">
                                    { "Aviation Parts" }
                                </Link<Route>>
                            </li>
                            <li>
                                <Link<Route> to={Route::HeavyMachinery} classes="footer-link">
                                    { "Heavy Machinery" }
                                </Link<Route>>
                            </li>
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h4>{ "Global Operations" }</h4>
                        <div class="footer-contact">
                            <span>{ "📍" }</span>
                            <span>{ "Dubai, UAE" }<br />{ "Global Headquarters" }</span>
                        </div>
                        <div class="footer-contact">
                            <span>{ "✉️" }</span>
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                                { config::CONTACT_EMAIL }
                            </a>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{ format!("© {} PARTSFORM. All rights reserved.", year) }</p>
                    <div class="footer-legal">
                        <span>{ "Terms" }</span>
                        <span>{ "Privacy" }</span>
                        <span>{ "Cookies" }</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}
