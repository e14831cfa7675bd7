use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config;
use crate::domain::{Action, content::Section, icons::Icon, leads::LeadKind, logging::LogComponent};
use crate::global_state::dispatch;
use crate::infrastructure::map::{MapConfig, MapLibreBackend, MapSlot};
use crate::presentation::widgets::Glyph;
use crate::log_error;

/// Showroom map. Mounted once after the container is attached, released on unmount.
#[component]
fn ShowroomMap() -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let slot = Rc::new(RefCell::new(MapSlot::new(MapLibreBackend, MapConfig::default())));

    let mount_slot = Rc::clone(&slot);
    container.on_load(move |element| {
        // Wait one frame so the container is in the document and has a size.
        request_animation_frame(move || {
            let target: &web_sys::HtmlElement = &element;
            if let Err(e) = mount_slot.borrow_mut().mount(target) {
                log_error!(LogComponent::Presentation("ShowroomMap"), "❌ Map mount failed: {}", e);
            }
        });
    });

    on_cleanup(move || {
        slot.borrow_mut().release();
    });

    view! { <div class="map" node_ref=container></div> }
}

#[component]
pub fn ContactsSection() -> impl IntoView {
    let rows = [
        (Icon::Phone, "Телефон", config::PHONE_DISPLAY, Some(config::PHONE_HREF.to_string())),
        (Icon::Mail, "Email", config::EMAIL, Some(format!("mailto:{}", config::EMAIL))),
        (Icon::MapPin, "Адрес", config::ADDRESS, None),
        (Icon::Clock, "Режим работы", config::OPENING_HOURS, None),
    ];

    view! {
        <section id=Section::Contacts.anchor() class="section">
            <div class="container two-col">
                <div>
                    <h2>"Контакты"</h2>
                    <ul class="contacts">
                        {rows
                            .into_iter()
                            .map(|(icon, label, value, href)| {
                                view! {
                                    <li>
                                        <Glyph icon=icon size=20 />
                                        <div>
                                            <span class="muted">{label}</span>
                                            {match href {
                                                Some(href) => view! { <a href=href>{value}</a> }.into_view(),
                                                None => view! { <b>{value}</b> }.into_view(),
                                            }}
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="messengers">
                        <a class="btn btn-outline" href=config::TELEGRAM_URL target="_blank" rel="noopener">
                            <Glyph icon=Icon::Send size=18 />
                            "Telegram"
                        </a>
                        <a class="btn btn-outline" href=config::WHATSAPP_URL target="_blank" rel="noopener">
                            <Glyph icon=Icon::MessageCircle size=18 />
                            "WhatsApp"
                        </a>
                        <button class="btn btn-gold" on:click=move |_| dispatch(Action::OpenLead(LeadKind::Callback))>
                            <Glyph icon=Icon::Phone size=18 />
                            "Перезвоните мне"
                        </button>
                    </div>
                </div>
                <ShowroomMap />
            </div>
        </section>
    }
}
