use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::sections::{self, active_section, ScrollIntent, Section};
use crate::Route;

/// Fixed navigation bar: section links with scroll-spy highlighting, a
/// compact style once the page scrolls, and a burger-toggled mobile overlay.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| Section::Home);
    let navigator = use_navigator().unwrap();
    let route = use_route::<Route>();
    let scroll_intent = use_context::<ScrollIntent>().unwrap();

    {
        let scrolled = scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    scrolled.set(scroll_top > 20.0);

                    // Scroll spy: section boxes in priority order. Anchors
                    // missing from the current page can never match.
                    let boxes: Vec<(f64, f64)> = Section::ALL
                        .iter()
                        .map(|section| {
                            document
                                .get_element_by_id(section.id())
                                .map(|element| {
                                    let rect = element.get_bounding_client_rect();
                                    (rect.top(), rect.bottom())
                                })
                                .unwrap_or((f64::NAN, f64::NAN))
                        })
                        .collect();
                    if let Some(section) = active_section(&boxes) {
                        active.set(section);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Close the mobile menu on every navigation.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            route.clone(),
        );
    }

    let scroll_to_section = {
        let active = active.clone();
        let menu_open = menu_open.clone();
        let navigator = navigator.clone();
        let scroll_intent = scroll_intent.clone();
        let on_home = route == Some(Route::Home);
        Callback::from(move |section: Section| {
            if on_home {
                sections::scroll_into_view(section);
                active.set(section);
            } else {
                // Hand the target to the home page as a one-shot message and
                // let it scroll once mounted.
                scroll_intent.request(section);
                navigator.push(&Route::Home);
            }
            menu_open.set(false);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let section_link = |section: Section, base: &'static str| -> Html {
        let onclick = {
            let scroll_to_section = scroll_to_section.clone();
            Callback::from(move |_: MouseEvent| scroll_to_section.emit(section))
        };
        let class = classes!(base, (*active == section).then(|| "active"));
        html! {
            <button {onclick} {class} key={section.id()}>
                { section.label() }
            </button>
        }
    };

    let logo_click = {
        let scroll_to_section = scroll_to_section.clone();
        Callback::from(move |_: MouseEvent| scroll_to_section.emit(Section::Home))
    };

    html! {
        <nav class={classes!("top-nav", (*scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <button class="nav-logo" onclick={logo_click}>
                    <img src="/assets/partsform-logo.png" alt="PARTSFORM" />
                </button>

                <div class="nav-links">
                    { for Section::ALL.iter().map(|&section| section_link(section, "nav-link")) }
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for Section::ALL.iter().map(|&section| section_link(section, "mobile-link")) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
