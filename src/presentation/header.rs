use leptos::*;
use strum::IntoEnumIterator;

use crate::application::coordinator;
use crate::config;
use crate::domain::{
    Action,
    content::{HERO_STATS, Section},
    icons::Icon,
    leads::LeadKind,
};
use crate::global_state::{dispatch, select};
use crate::presentation::widgets::Glyph;

#[component]
pub fn ContactBar() -> impl IntoView {
    view! {
        <div class="contact-bar">
            <div class="container contact-bar-inner">
                <span class="contact-item">
                    <Glyph icon=Icon::MapPin size=14 />
                    {config::ADDRESS}
                </span>
                <span class="contact-item">
                    <Glyph icon=Icon::Clock size=14 />
                    {config::OPENING_HOURS}
                </span>
                <a class="contact-item" href=config::PHONE_HREF>
                    <Glyph icon=Icon::Phone size=14 />
                    {config::PHONE_DISPLAY}
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let menu_open = create_rw_signal(false);
    let active = select(|s| s.active_section);

    let go = move |section: Section| {
        menu_open.set(false);
        coordinator::navigate(section);
    };

    let links = move || {
        Section::iter()
            .filter_map(|section| section.nav_label().map(|label| (section, label)))
            .map(|(section, label)| {
                view! {
                    <a
                        href=format!("#{}", section.anchor())
                        class="nav-link"
                        class:active=move || active.get() == section
                        on:click=move |ev| {
                            ev.prevent_default();
                            go(section);
                        }
                    >
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="nav">
            <div class="container nav-inner">
                <a
                    href="#home"
                    class="logo"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go(Section::Home);
                    }
                >
                    <Glyph icon=Icon::Car size=28 />
                    <span>"Premium"<b>"Auto"</b></span>
                </a>
                <nav class="nav-links">{links}</nav>
                <button class="btn btn-gold nav-cta" on:click=move |_| dispatch(Action::OpenLead(LeadKind::Callback))>
                    <Glyph icon=Icon::Phone size=16 />
                    "Обратный звонок"
                </button>
                <button
                    class="nav-burger"
                    aria-label="Меню"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <Glyph icon=Icon::Menu size=24 />
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="nav-mobile">{links}</nav>
            </Show>
        </header>
    }
}

/// Number animating from zero to `end` once the hero is shown
#[component]
fn CountUp(end: u64, suffix: &'static str) -> impl IntoView {
    use crate::domain::content::{count_up_finished, count_up_value};
    use crate::format::group_thousands;
    use crate::infrastructure::dom::now_ms;
    use gloo::timers::callback::Interval;

    let value = create_rw_signal(0u64);
    let ticker = store_value(None::<Interval>);
    let stop = move || {
        ticker.try_update_value(|ticker| drop(ticker.take()));
    };

    let started = now_ms();
    ticker.set_value(Some(Interval::new(16, move || {
        let elapsed = now_ms() - started;
        let next = count_up_value(end, elapsed, config::COUNT_UP_DURATION_MS);
        if value.get_untracked() != next {
            value.set(next);
        }
        if count_up_finished(elapsed, config::COUNT_UP_DURATION_MS) {
            // The interval cannot be dropped from inside its own callback.
            queue_microtask(stop);
        }
    })));
    on_cleanup(stop);

    view! { <span>{move || format!("{}{}", group_thousands(value.get()), suffix)}</span> }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=Section::Home.anchor() class="hero">
            <div class="container hero-inner">
                <span class="hero-badge">
                    <Glyph icon=Icon::Sparkles size=16 />
                    "Премиальные автомобили с гарантией"
                </span>
                <h1>"Автомобиль вашей мечты " <span class="gold">"уже ждет вас"</span></h1>
                <p class="hero-lead">
                    "Новые и проверенные автомобили с пробегом. Кредит от 4,9%, Trade-in и тест-драйв в день обращения."
                </p>
                <div class="hero-actions">
                    <button class="btn btn-gold" on:click=move |_| coordinator::navigate(Section::Catalog)>
                        "Смотреть каталог"
                        <Glyph icon=Icon::ArrowRight size=18 />
                    </button>
                    <button class="btn btn-outline" on:click=move |_| dispatch(Action::OpenLead(LeadKind::TestDrive))>
                        "Записаться на тест-драйв"
                    </button>
                </div>
                <div class="hero-stats">
                    {HERO_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="stat">
                                    <div class="stat-value">
                                        <CountUp end=stat.value suffix=stat.suffix />
                                    </div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
