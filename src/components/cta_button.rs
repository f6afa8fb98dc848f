use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::{CTA_NAV_DELAY_MS, CTA_PENDING_RESET_MS};
use crate::Route;

/// Where a call-to-action sends the browser.
#[derive(Clone, PartialEq)]
pub enum CtaTarget {
    /// In-app route, pushed through the router.
    Route(Route),
    /// Full-page redirect, typically to the external parts portal.
    External(AttrValue),
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub target: CtaTarget,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Call-to-action button with a short pending phase before it navigates.
///
/// Clicking disables the button and shows a spinner, then the navigation
/// fires after a fixed delay. If the navigation never unloads the page (a
/// blocked redirect), a guard timer returns the button to idle so it can be
/// retried. Both timers die with the component.
#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let pending = use_state(|| false);
    let timers = use_mut_ref(Vec::<Timeout>::new);
    let navigator = use_navigator().unwrap();

    let onclick = {
        let pending = pending.clone();
        let timers = timers.clone();
        let navigator = navigator.clone();
        let target = props.target.clone();
        Callback::from(move |_: MouseEvent| {
            if *pending {
                return;
            }
            pending.set(true);

            let navigate = {
                let navigator = navigator.clone();
                let target = target.clone();
                Timeout::new(CTA_NAV_DELAY_MS, move || match &target {
                    CtaTarget::Route(route) => navigator.push(route),
                    CtaTarget::External(url) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(url);
                        }
                    }
                })
            };
            let reset = {
                let pending = pending.clone();
                Timeout::new(CTA_PENDING_RESET_MS, move || pending.set(false))
            };

            let mut timers = timers.borrow_mut();
            timers.clear();
            timers.push(navigate);
            timers.push(reset);
        })
    };

    html! {
        <button {onclick} disabled={*pending} class={props.class.clone()}>
            {
                if *pending {
                    html! {
                        <>
                            <span class="cta-spinner"></span>
                            { "Loading..." }
                        </>
                    }
                } else {
                    html! { <>{ for props.children.iter() }</> }
                }
            }
        </button>
    }
}
