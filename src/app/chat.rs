use std::time::Duration;

use leptos::{html, prelude::*};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::chat::{canned_reply, ChatLog, ChatState};

use super::{toast::use_toasts, use_settings};

#[component]
pub fn ChatWidget() -> impl IntoView {
    let settings = use_settings();
    let toasts = use_toasts();
    let chat = RwSignal::new(ChatLog::new());
    let (open, set_open) = signal(false);
    let (draft, set_draft) = signal(String::new());
    // outstanding reply timers, keyed by the user message they answer
    let timers = StoredValue::new(Vec::<(u32, TimeoutHandle)>::new());
    let bottom_ref = NodeRef::<html::Div>::new();

    on_cleanup(move || {
        if let Some(pending) = timers.try_update_value(std::mem::take) {
            pending.into_iter().for_each(|(_, handle)| handle.clear());
        }
    });

    Effect::new(move |_| {
        chat.with(|l| l.messages().len());
        if let Some(el) = bottom_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let reply_to = move |id: u32| {
        timers.try_update_value(|t| t.retain(|(key, _)| *key != id));
        let reply = canned_reply(&mut rand::thread_rng());
        let outcome = chat.try_update(|l| l.receive(reply).map(|_| ()).err());
        if let Some(Some(e)) = outcome {
            log::warn!("chat: reply to message {id} failed: {e}");
            toasts.destructive("Error", e.to_string());
        }
    };

    let send = move || {
        let text = draft.get_untracked();
        let mut sent = None;
        chat.update(|l| sent = l.send(&text).map(|m| m.id));
        let Some(id) = sent else {
            return;
        };
        set_draft.set(String::new());
        match set_timeout_with_handle(
            move || reply_to(id),
            Duration::from_millis(settings.chat_reply_delay_ms),
        ) {
            Ok(handle) => timers.update_value(|t| t.push((id, handle))),
            Err(e) => log::error!("chat: couldn't schedule reply: {e:?}"),
        }
    };

    let awaiting = move || chat.with(|l| l.state() == ChatState::AwaitingReply);

    view! {
        <div class="fixed bottom-6 right-6 z-50 flex flex-col items-end gap-3">
            <Show when=move || open.get()>
                <div class="glass w-80 sm:w-96 h-[28rem] rounded-2xl shadow-xl flex flex-col overflow-hidden">
                    <div class="flex items-center justify-between px-4 py-3 border-b border-border/40">
                        <h3 class="font-semibold">"AI Assistant"</h3>
                        <button
                            type="button"
                            aria-label="Close chat"
                            on:click=move |_| set_open.set(false)
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="flex-1 overflow-y-auto p-4 space-y-3">
                        <For
                            each=move || chat.with(|l| l.messages().to_vec())
                            key=|message| message.id
                            let:message
                        >
                            <div class=if message.is_user() {
                                "flex justify-end"
                            } else {
                                "flex justify-start"
                            }>
                                <p class=if message.is_user() {
                                    "max-w-[80%] rounded-2xl px-4 py-2 bg-primary text-primary-foreground"
                                } else {
                                    "max-w-[80%] rounded-2xl px-4 py-2 bg-muted"
                                }>{message.text}</p>
                            </div>
                        </For>
                        <Show when=awaiting>
                            <p class="text-sm text-muted-foreground animate-pulse">"Typing..."</p>
                        </Show>
                        <div node_ref=bottom_ref></div>
                    </div>
                    <form
                        class="flex gap-2 p-3 border-t border-border/40"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            send();
                        }
                    >
                        <input
                            type="text"
                            placeholder="Type your message..."
                            class="input flex-1"
                            prop:value=draft
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || draft.with(|d| d.trim().is_empty())
                        >
                            "Send"
                        </button>
                    </form>
                </div>
            </Show>
            <button
                type="button"
                class="h-14 w-14 rounded-full bg-primary text-primary-foreground shadow-lg text-2xl"
                aria-label=move || if open.get() { "Close chat" } else { "Open chat" }
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {move || if open.get() { "✕" } else { "💬" }}
            </button>
        </div>
    }
}
