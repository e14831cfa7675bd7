use leptos::*;

use crate::application::coordinator;
use crate::domain::{Action, assistant::Author, icons::Icon};
use crate::global_state::{dispatch, select};
use crate::presentation::widgets::Glyph;

/// Floating consultant chat
#[component]
pub fn ChatWidget() -> impl IntoView {
    let open = select(|s| s.chat.open);
    let typing = select(|s| s.chat.typing);
    let draft = select(|s| s.chat.draft.clone());
    let messages = select(|s| s.chat.messages.clone());
    let log = create_node_ref::<html::Div>();

    create_effect(move |_| {
        let _ = messages.with(Vec::len);
        let _ = typing.get();
        if let Some(log) = log.get() {
            log.set_scroll_top(log.scroll_height());
        }
    });

    view! {
        <div class="chat">
            <Show when=move || open.get()>
                <div class="chat-panel">
                    <div class="chat-head">
                        <Glyph icon=Icon::Bot size=22 />
                        <div>
                            <b>"Онлайн-консультант"</b>
                            <span class="muted">"Отвечаем мгновенно"</span>
                        </div>
                        <button class="icon-btn" aria-label="Закрыть чат" on:click=move |_| dispatch(Action::ToggleChat)>
                            <Glyph icon=Icon::Close size=18 />
                        </button>
                    </div>
                    <div class="chat-log" node_ref=log>
                        {move || {
                            messages
                                .get()
                                .into_iter()
                                .map(|message| {
                                    view! {
                                        <div class="bubble" class:user={message.author == Author::User}>
                                            {message.text}
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                        <Show when=move || typing.get()>
                            <div class="bubble typing">
                                <span></span>
                                <span></span>
                                <span></span>
                            </div>
                        </Show>
                    </div>
                    <form
                        class="chat-input"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            coordinator::send_chat();
                        }
                    >
                        <input
                            class="field"
                            type="text"
                            placeholder="Напишите вопрос..."
                            prop:value=move || draft.get()
                            on:input=move |ev| dispatch(Action::EditChatDraft(event_target_value(&ev)))
                        />
                        <button type="submit" class="icon-btn" aria-label="Отправить">
                            <Glyph icon=Icon::Send size=18 />
                        </button>
                    </form>
                </div>
            </Show>
            <button class="chat-toggle" aria-label="Чат" on:click=move |_| dispatch(Action::ToggleChat)>
                {move || {
                    let icon = if open.get() { Icon::Close } else { Icon::MessageSquare };
                    view! { <Glyph icon=icon size=26 /> }
                }}
            </button>
        </div>
    }
}
