use leptos::{ev, html, prelude::*};

use crate::reveal::{ListenerSlot, RevealSpec, RevealState, Trigger};

type Listeners = StoredValue<ListenerSlot<WindowListenerHandle>, LocalStorage>;

/// Watches `target` and flips the returned signal once its trigger is met.
///
/// Listeners are attached the first time the element is available and are
/// released either right after the group fires or when the owner is cleaned
/// up, whichever happens first. If the element never shows up nothing is
/// registered.
pub fn use_reveal(target: NodeRef<html::Div>, trigger: Trigger) -> Signal<bool> {
    let (fired, set_fired) = signal(false);
    let state = StoredValue::new(RevealState::default());
    let listeners: Listeners = StoredValue::new_local(ListenerSlot::default());

    let check = move || {
        let visible = target.get_untracked().is_some_and(|el| {
            let top = el.get_bounding_client_rect().top();
            trigger.is_crossed(top, viewport_height())
        });
        let transitioned = state
            .try_update_value(|s| s.observe(visible))
            .unwrap_or(false);
        if transitioned {
            set_fired.set(true);
            // the listener running this check is still on the stack
            request_animation_frame(move || dispose(listeners));
        }
    };

    Effect::new(move |_| {
        if target.get().is_none() {
            return;
        }
        let registered = listeners
            .try_update_value(|slot| {
                slot.register(|| match trigger {
                    Trigger::Mount => Vec::new(),
                    Trigger::Viewport(_) => vec![
                        window_event_listener(ev::scroll, move |_| check()),
                        window_event_listener(ev::resize, move |_| check()),
                    ],
                })
            })
            .unwrap_or(false);
        if !registered {
            return;
        }
        // first sample after paint so the start offset is visible
        request_animation_frame(check);
    });

    on_cleanup(move || dispose(listeners));

    fired.into()
}

fn dispose(listeners: Listeners) {
    if let Some(handles) = listeners.try_update_value(ListenerSlot::take_for_dispose) {
        handles.into_iter().for_each(WindowListenerHandle::remove);
    }
}

fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default()
}

#[derive(Clone, Copy)]
struct RevealContext {
    fired: Signal<bool>,
    spec: RevealSpec,
}

/// Whether the enclosing [`RevealGroup`] has fired.
pub fn use_group_fired() -> Signal<bool> {
    use_context::<RevealContext>()
        .map(|ctx| ctx.fired)
        .unwrap_or_else(|| Signal::derive(|| true))
}

#[component]
pub fn RevealGroup(
    spec: RevealSpec,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let fired = use_reveal(target, spec.trigger);
    provide_context(RevealContext { fired, spec });
    view! {
        <div node_ref=target class=class>
            {children()}
        </div>
    }
}

/// One staggered member of a [`RevealGroup`]. `index` sets its place in the
/// stagger order.
#[component]
pub fn RevealItem(
    #[prop(optional)] index: usize,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<RevealContext>();
    let style = move || match ctx {
        Some(RevealContext { fired, spec }) => spec.style(fired.get(), index),
        None => String::new(),
    };
    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}
