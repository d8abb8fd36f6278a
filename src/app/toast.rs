use std::time::Duration;

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: u32,
    title: String,
    description: String,
    kind: ToastKind,
}

/// Handle for raising toasts from anywhere below [`provide_toasts`].
#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
    duration: Duration,
}

impl Toasts {
    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Success, title.into(), description.into());
    }

    pub fn destructive(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Destructive, title.into(), description.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.items.try_update(|items| items.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, title: String, description: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| {
            items.push(Toast {
                id,
                title,
                description,
                kind,
            })
        });
        let this = *self;
        set_timeout(move || this.dismiss(id), self.duration);
    }
}

pub fn provide_toasts(duration_ms: u64) {
    provide_context(Toasts {
        items: RwSignal::new(Vec::new()),
        next_id: StoredValue::new(0),
        duration: Duration::from_millis(duration_ms),
    });
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <ol class="fixed bottom-4 left-4 z-50 flex flex-col gap-2 w-full max-w-sm" aria-live="polite">
            <For each=move || toasts.items.get() key=|toast| toast.id let:toast>
                <li
                    role="status"
                    class=match toast.kind {
                        ToastKind::Success => "toast",
                        ToastKind::Destructive => "toast toast-destructive",
                    }
                >
                    <div class="flex-1">
                        <p class="font-semibold">{toast.title}</p>
                        <p class="text-sm opacity-90">{toast.description}</p>
                    </div>
                    <button
                        type="button"
                        class="opacity-70 hover:opacity-100"
                        aria-label="Dismiss"
                        on:click=move |_| toasts.dismiss(toast.id)
                    >
                        "✕"
                    </button>
                </li>
            </For>
        </ol>
    }
}
