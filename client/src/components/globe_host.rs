//! Bridge component between the Leptos UI and the imperative `globe::Globe`.
//!
//! ARCHITECTURE
//! ============
//! The globe crate owns projection, rotation, and the canvas render pass;
//! this host wires DOM events into the engine, keeps the declarative pin
//! overlay synchronized through the shared placement function, and forwards
//! activation events to the embedding application.
//!
//! The engine lives in an `Rc<RefCell<Option<Globe>>>` slot: `None` before
//! mount and after cleanup, so late timer or pointer callbacks can never
//! mutate a torn-down instance. The auto-rotation interval and the window
//! resize listener are scoped to the component and released on cleanup.

use leptos::prelude::*;

use globe::pin::Pin;
use globe::placement::place;

use crate::state::globe_view::GlobeViewState;
use crate::util::overlay_style::{
    CANVAS_STYLE, HIDDEN_PIN_STYLE, OVERLAY_LAYER_STYLE, hit_target_style, host_style,
};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;
#[cfg(feature = "hydrate")]
use js_sys::Date;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

#[cfg(feature = "hydrate")]
use globe::consts::AUTO_TICK_MS;
#[cfg(feature = "hydrate")]
use globe::engine::{Action, Globe};

#[cfg(feature = "hydrate")]
use crate::util::globe_viewport::{sync_view_state, sync_viewport};

#[cfg(feature = "hydrate")]
fn render_and_track(globe: &mut Globe, pins: &[Pin], view: RwSignal<GlobeViewState>) {
    let started_ms = Date::now();
    if let Err(err) = globe.render(pins) {
        log::warn!("globe render failed: {err:?}");
        return;
    }
    let elapsed_ms = (Date::now() - started_ms).max(0.0);
    view.update(|v| {
        v.last_render_ms = Some(elapsed_ms);
    });
}

#[cfg(feature = "hydrate")]
fn process_actions(
    actions: Vec<Action>,
    globe: &mut Globe,
    pins: &[Pin],
    view: RwSignal<GlobeViewState>,
    cursor: RwSignal<String>,
    on_pin_activated: Option<Callback<Pin>>,
) {
    for action in actions {
        match action {
            Action::PinActivated(pin) => {
                if let Some(callback) = on_pin_activated {
                    callback.run(pin);
                }
            }
            Action::SetCursor(name) => cursor.set(name),
            Action::RenderNeeded => render_and_track(globe, pins, view),
        }
    }
}

/// Globe host component.
///
/// On hydration, this mounts `globe::engine::Globe` on the canvas, starts the
/// auto-rotation interval, attaches the resize listener, and keeps the
/// transparent pin hit-targets pixel-synchronized with the canvas-drawn dots
/// through the shared placement function.
#[component]
pub fn GlobeHost(
    /// Pin collection, supplied fresh by the embedding application.
    #[prop(into)]
    pins: Signal<Vec<Pin>>,
    /// Invoked with the full pin record when a pin hit-target is clicked.
    #[prop(optional)]
    on_pin_activated: Option<Callback<Pin>>,
) -> impl IntoView {
    // Embedding chrome may provide the telemetry signal; otherwise it stays
    // component-local.
    let view_state = use_context::<RwSignal<GlobeViewState>>()
        .unwrap_or_else(|| RwSignal::new(GlobeViewState::default()));
    let cursor = RwSignal::new("grab".to_owned());
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(not(feature = "hydrate"))]
    let _ = &on_pin_activated;

    #[cfg(feature = "hydrate")]
    let engine = Rc::new(RefCell::new(None::<Globe>));
    #[cfg(feature = "hydrate")]
    let auto_tick = Rc::new(RefCell::new(None::<Interval>));

    #[cfg(feature = "hydrate")]
    {
        let engine_mount = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine_mount.borrow().is_some() {
                return;
            }

            let mut instance = Globe::new(canvas);
            sync_viewport(&mut instance, &canvas_ref);
            sync_view_state(&instance, view_state);
            render_and_track(&mut instance, &pins.get_untracked(), view_state);
            *engine_mount.borrow_mut() = Some(instance);
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let engine_pins = Rc::clone(&engine);
        Effect::new(move || {
            let current = pins.get();
            if let Some(globe) = engine_pins.borrow_mut().as_mut() {
                render_and_track(globe, &current, view_state);
            }
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let engine_tick = Rc::clone(&engine);
        let auto_tick_slot = Rc::clone(&auto_tick);
        let dragging = Memo::new(move |_| view_state.with(|v| v.dragging));
        Effect::new(move || {
            if dragging.get() {
                // The drag owns the scalar; suspend the timer driver entirely.
                auto_tick_slot.borrow_mut().take();
                return;
            }
            if auto_tick_slot.borrow().is_some() {
                return;
            }

            let engine_for_tick = Rc::clone(&engine_tick);
            let tick = Interval::new(AUTO_TICK_MS, move || {
                if let Some(globe) = engine_for_tick.borrow_mut().as_mut() {
                    let actions = globe.on_tick();
                    process_actions(
                        actions,
                        globe,
                        &pins.get_untracked(),
                        view_state,
                        cursor,
                        on_pin_activated,
                    );
                    sync_view_state(globe, view_state);
                }
            });
            *auto_tick_slot.borrow_mut() = Some(tick);
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let resize_listener = Rc::new(RefCell::new(None::<Closure<dyn FnMut()>>));

        let engine_resize = Rc::clone(&engine);
        let listener_slot = Rc::clone(&resize_listener);
        Effect::new(move || {
            if listener_slot.borrow().is_some() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };

            let engine_for_resize = Rc::clone(&engine_resize);
            let closure = Closure::wrap(Box::new(move || {
                if let Some(globe) = engine_for_resize.borrow_mut().as_mut() {
                    sync_viewport(globe, &canvas_ref);
                    // Redraw after the resize, never before it.
                    render_and_track(globe, &pins.get_untracked(), view_state);
                }
            }) as Box<dyn FnMut()>);

            if window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("failed to attach resize listener");
                return;
            }
            *listener_slot.borrow_mut() = Some(closure);
        });

        let engine_cleanup = Rc::clone(&engine);
        let auto_tick_cleanup = Rc::clone(&auto_tick);
        let listener_cleanup = Rc::clone(&resize_listener);
        on_cleanup(move || {
            auto_tick_cleanup.borrow_mut().take();
            if let Some(closure) = listener_cleanup.borrow_mut().take() {
                if let Some(window) = web_sys::window() {
                    if window
                        .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("failed to detach resize listener");
                    }
                }
            }
            // Empty the slot so late events cannot mutate a torn-down instance.
            engine_cleanup.borrow_mut().take();
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                if let Some(globe) = engine.borrow_mut().as_mut() {
                    let actions = globe.on_pointer_down(f64::from(ev.client_x()));
                    process_actions(
                        actions,
                        globe,
                        &pins.get_untracked(),
                        view_state,
                        cursor,
                        on_pin_activated,
                    );
                    sync_view_state(globe, view_state);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(globe) = engine.borrow_mut().as_mut() {
                    let actions = globe.on_pointer_move(f64::from(ev.client_x()));
                    process_actions(
                        actions,
                        globe,
                        &pins.get_untracked(),
                        view_state,
                        cursor,
                        on_pin_activated,
                    );
                    sync_view_state(globe, view_state);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(globe) = engine.borrow_mut().as_mut() {
                    let actions = globe.on_pointer_up();
                    process_actions(
                        actions,
                        globe,
                        &pins.get_untracked(),
                        view_state,
                        cursor,
                        on_pin_activated,
                    );
                    sync_view_state(globe, view_state);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    // Leaving the surface ends any drag, same as releasing the pointer.
    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(globe) = engine.borrow_mut().as_mut() {
                    let actions = globe.on_pointer_up();
                    process_actions(
                        actions,
                        globe,
                        &pins.get_untracked(),
                        view_state,
                        cursor,
                        on_pin_activated,
                    );
                    sync_view_state(globe, view_state);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let activate_pin = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |pin: &Pin| {
                if let Some(globe) = engine.borrow_mut().as_mut() {
                    let actions = globe.on_pin_click(pin);
                    process_actions(
                        actions,
                        globe,
                        &pins.get_untracked(),
                        view_state,
                        cursor,
                        on_pin_activated,
                    );
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_pin: &Pin| {}
        }
    };

    let enter_pin = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |id: &str| {
                if let Some(globe) = engine.borrow_mut().as_mut() {
                    let actions = globe.on_pin_enter(id);
                    process_actions(
                        actions,
                        globe,
                        &pins.get_untracked(),
                        view_state,
                        cursor,
                        on_pin_activated,
                    );
                    sync_view_state(globe, view_state);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_id: &str| {}
        }
    };

    let leave_pin = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |id: &str| {
                if let Some(globe) = engine.borrow_mut().as_mut() {
                    let actions = globe.on_pin_leave(id);
                    process_actions(
                        actions,
                        globe,
                        &pins.get_untracked(),
                        view_state,
                        cursor,
                        on_pin_activated,
                    );
                    sync_view_state(globe, view_state);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_id: &str| {}
        }
    };

    // Pins currently on the near hemisphere, in caller order. Keyed by id so
    // overlay nodes persist while a pin stays visible.
    let visible_pins = move || {
        let state = view_state.get();
        pins.get()
            .iter()
            .filter(|pin| place(pin, state.rotation_deg, state.hovered_pin.as_deref()).is_some())
            .cloned()
            .collect::<Vec<_>>()
    };

    view! {
        <div
            class="globe-host"
            style=move || host_style(&cursor.get())
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
        >
            <canvas node_ref=canvas_ref class="globe-host__canvas" style=CANVAS_STYLE></canvas>
            <div class="globe-host__pins" style=OVERLAY_LAYER_STYLE>
                <For
                    each=visible_pins
                    key=|pin| pin.id.clone()
                    children=move |pin: Pin| {
                        let style_pin = pin.clone();
                        let style = move || {
                            let state = view_state.get();
                            place(&style_pin, state.rotation_deg, state.hovered_pin.as_deref())
                                .map_or_else(
                                    || HIDDEN_PIN_STYLE.to_owned(),
                                    |placement| hit_target_style(&placement),
                                )
                        };
                        let click_pin = pin.clone();
                        let enter_id = pin.id.clone();
                        let leave_id = pin.id.clone();
                        let activate = activate_pin.clone();
                        let enter = enter_pin.clone();
                        let leave = leave_pin.clone();
                        view! {
                            <button
                                class="globe-host__pin"
                                style=style
                                attr:aria-label=pin.concept.clone()
                                on:click=move |_| activate(&click_pin)
                                on:pointerenter=move |_| enter(&enter_id)
                                on:pointerleave=move |_| leave(&leave_id)
                            ></button>
                        }
                    }
                />
            </div>
        </div>
    }
}
