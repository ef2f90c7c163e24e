//! AI assistant chat page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sends one prompt at a time to `/chat` and appends the reply. Failures
//! show a dismissable banner and a canned assistant reply instead.

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::net::api::ApiClient;
use crate::state::chat::{ChatState, Sender};
use crate::state::query::{Clock, SystemClock};
use crate::util::format::format_clock;

#[component]
pub fn ChatPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let chat = RwSignal::new(ChatState::new(0));
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Browser only; the server render keeps a zero timestamp.
    Effect::new(move || chat.update(|c| c.stamp_greeting(SystemClock.now_ms())));
    Effect::new(move || {
        chat.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let Some(prompt) = chat.try_update(|c| c.begin_send(&input.get_untracked(), SystemClock.now_ms())).flatten()
        else {
            return;
        };
        input.set(String::new());
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let reply = api.chat(&prompt).await;
            chat.update(|c| c.receive(reply, SystemClock.now_ms()));
        });
    };

    let send_on_click = do_send.clone();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.with(|i| i.trim().is_empty()) && !chat.with(|c| c.sending);

    view! {
        <section class="page chat">
            <header class="page__header page__header--centered">
                <h1 class="page__title">"AI Stock Assistant"</h1>
                <p class="page__subtitle">"Get insights about your portfolio and market analysis"</p>
            </header>

            {move || {
                chat.with(|c| c.error.clone())
                    .map(|message| {
                        view! {
                            <Alert
                                kind=AlertKind::Error
                                message=message
                                on_dismiss=Callback::new(move |()| chat.update(ChatState::dismiss_error))
                            />
                        }
                    })
            }}

            <div class="chat__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages
                        .into_iter()
                        .map(|msg| {
                            let from_user = msg.sender == Sender::User;
                            view! {
                                <div class="chat__row" class:chat__row--user=from_user>
                                    <div class="chat__bubble" class:chat__bubble--user=from_user>
                                        <p class="chat__text">{msg.content}</p>
                                        <span class="chat__time">{format_clock(msg.sent_at_ms)}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    chat.with(|c| c.sending)
                        .then(|| view! { <div class="chat__thinking">"AI is thinking..."</div> })
                }}
            </div>

            <div class="chat__input-row">
                <input
                    class="field__input chat__input"
                    type="text"
                    placeholder="Ask me about your stocks, market trends, or investment advice..."
                    disabled=move || chat.with(|c| c.sending)
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary" type="button" on:click=move |_| send_on_click() disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </section>
    }
}
