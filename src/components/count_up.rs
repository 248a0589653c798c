use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;
use crate::controllers::count_up::Counter;
use crate::observer;

type FrameClosure = Closure<dyn FnMut(f64)>;

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub to: u32,
    #[prop_or(config::COUNT_UP_DURATION_MS)]
    pub duration_ms: f64,
}

fn schedule_frame(slot: &Rc<RefCell<Option<FrameClosure>>>, frame_id: &Rc<Cell<Option<i32>>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(callback) = slot.borrow().as_ref() {
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => frame_id.set(Some(id)),
            Err(err) => warn!("requestAnimationFrame failed: {:?}", err),
        }
    }
}

/// Integer that counts from 0 to `to` over `duration_ms`, starting the
/// first time it becomes visible. One-shot: it never restarts. If the
/// visibility observer cannot be set up, the final value is shown directly.
#[function_component(CountUp)]
pub fn count_up(props: &CountUpProps) -> Html {
    let node_ref = use_node_ref();
    let value = use_state(|| 0u32);
    let started = use_state(|| false);

    // Arm the visibility trigger once on mount.
    {
        let node_ref = node_ref.clone();
        let value = value.clone();
        let started = started.clone();
        let to = props.to;
        use_effect_with_deps(
            move |_| {
                let mut handle = None;
                if let Some(element) = node_ref.cast::<web_sys::Element>() {
                    let on_visible = {
                        let started = started.clone();
                        Callback::from(move |_| started.set(true))
                    };
                    match observer::observe_once(&element, config::COUNT_UP_THRESHOLD, on_visible)
                    {
                        Ok(h) => handle = Some(h),
                        Err(err) => {
                            warn!("count-up observer unavailable: {:?}", err);
                            value.set(to);
                        }
                    }
                } else {
                    value.set(to);
                }
                move || drop(handle)
            },
            (),
        );
    }

    // Per-frame loop, driven by requestAnimationFrame once triggered. The
    // counter self-terminates when progress reaches 1; unmount cancels any
    // pending frame.
    {
        let value = value.clone();
        use_effect_with_deps(
            move |(started, to, duration_ms)| {
                let frame_id = Rc::new(Cell::new(None::<i32>));
                let slot: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));

                if *started {
                    let counter = Rc::new(RefCell::new(Counter::new(*to, *duration_ms)));
                    let tick_slot = slot.clone();
                    let tick_id = frame_id.clone();
                    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                        let shown = counter.borrow_mut().frame(now);
                        value.set(shown);
                        if !counter.borrow().is_done() {
                            schedule_frame(&tick_slot, &tick_id);
                        }
                    }) as Box<dyn FnMut(f64)>));
                    schedule_frame(&slot, &frame_id);
                }

                move || {
                    if let (Some(id), Some(window)) = (frame_id.take(), web_sys::window()) {
                        let _ = window.cancel_animation_frame(id);
                    }
                    slot.borrow_mut().take();
                }
            },
            (*started, props.to, props.duration_ms),
        );
    }

    html! {
        <span ref={node_ref}>{ *value }</span>
    }
}
