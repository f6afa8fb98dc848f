use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::animation::{counter_sample, COUNTER_DURATION_MS, COUNTER_FRAME_MS};

#[derive(Properties, PartialEq)]
pub struct AnimatedNumberProps {
    pub value: u32,
    pub suffix: &'static str,
}

/// Stat figure that counts up from zero the first time it scrolls into view.
///
/// The run is triggered once; later visibility changes don't restart it. The
/// tick interval retires itself when the run completes, and the scroll
/// listener is removed on teardown.
#[function_component(AnimatedNumber)]
pub fn animated_number(props: &AnimatedNumberProps) -> Html {
    let shown = use_state(|| 0u32);
    let node = use_node_ref();
    let target = props.value;

    {
        let shown = shown.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let started = Rc::new(Cell::new(false));

                let start = {
                    let shown = shown.clone();
                    let interval = interval.clone();
                    let started = started.clone();
                    move || {
                        if started.get() {
                            return;
                        }
                        started.set(true);
                        let mut elapsed = 0u32;
                        let shown = shown.clone();
                        let cell = interval.clone();
                        *interval.borrow_mut() =
                            Some(Interval::new(COUNTER_FRAME_MS, move || {
                                elapsed += COUNTER_FRAME_MS;
                                shown.set(counter_sample(target, elapsed, COUNTER_DURATION_MS));
                                if elapsed >= COUNTER_DURATION_MS {
                                    // Run finished; retire the interval once
                                    // this tick has returned.
                                    if let Some(finished) = cell.borrow_mut().take() {
                                        Timeout::new(0, move || drop(finished)).forget();
                                    }
                                }
                            }));
                    }
                };

                let in_view = {
                    let node = node.clone();
                    let window = window.clone();
                    move || {
                        let viewport = window
                            .inner_height()
                            .ok()
                            .and_then(|height| height.as_f64())
                            .unwrap_or(0.0);
                        node.cast::<web_sys::Element>()
                            .map(|element| {
                                let rect = element.get_bounding_client_rect();
                                rect.top() < viewport && rect.bottom() > 0.0
                            })
                            .unwrap_or(false)
                    }
                };

                let scroll_callback = {
                    let start = start.clone();
                    let in_view = in_view.clone();
                    Closure::wrap(Box::new(move || {
                        if in_view() {
                            start();
                        }
                    }) as Box<dyn FnMut()>)
                };
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // The stats row usually sits in the hero, so check right away.
                if in_view() {
                    start();
                }

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    interval.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <span ref={node}>{ *shown }{ props.suffix }</span>
    }
}
