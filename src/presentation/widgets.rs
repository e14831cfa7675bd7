//! Small shared building blocks.

use leptos::*;

use crate::domain::{Action, icons::Icon};
use crate::global_state::{dispatch, select};

/// Static SVG glyph from `/icons`
#[component]
pub fn Glyph(
    icon: Icon,
    #[prop(default = 20)] size: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <img
            class=format!("glyph {}", class)
            src=icon.asset()
            width=size
            height=size
            alt=""
            aria-hidden="true"
        />
    }
}

/// Dim backdrop plus centered panel. Clicking the backdrop runs `on_close`.
#[component]
pub fn Modal(
    on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.call(())>
            <div
                class="modal-panel"
                class:wide=wide
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <button class="modal-close" aria-label="Закрыть" on:click=move |_| on_close.call(())>
                    <Glyph icon=Icon::Close size=22 />
                </button>
                {children()}
            </div>
        </div>
    }
}

/// Non-blocking inline message, e.g. the comparison limit.
#[component]
pub fn NoticeToast() -> impl IntoView {
    let notice = select(|s| s.notice.clone());

    view! {
        {move || {
            notice
                .get()
                .map(|text| {
                    view! {
                        <div class="notice" role="status">
                            <Glyph icon=Icon::AlertCircle size=18 />
                            <span>{text}</span>
                            <button
                                class="notice-close"
                                aria-label="Скрыть"
                                on:click=move |_| dispatch(Action::DismissNotice)
                            >
                                <Glyph icon=Icon::Close size=16 />
                            </button>
                        </div>
                    }
                })
        }}
    }
}

#[component]
pub fn Stars(rating: u8) -> impl IntoView {
    view! {
        <div class="stars" aria-label=format!("Оценка {} из 5", rating)>
            {(0..rating).map(|_| view! { <Glyph icon=Icon::Star size=16 class="star" /> }).collect_view()}
        </div>
    }
}
