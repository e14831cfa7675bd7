//! Mostly static marketing sections.

use leptos::*;

use crate::application::coordinator;
use crate::config;
use crate::domain::{
    Action,
    content::{BENEFITS, FAQ, REVIEWS, Section},
    icons::Icon,
    leads::LeadKind,
};
use crate::global_state::{dispatch, select};
use crate::presentation::widgets::{Glyph, Stars};

#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container benefits">
                {BENEFITS
                    .iter()
                    .map(|benefit| {
                        view! {
                            <div class="benefit">
                                <span class="benefit-icon"><Glyph icon=benefit.icon size=28 /></span>
                                <h3>{benefit.title}</h3>
                                <p class="muted">{benefit.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn TradeInSection() -> impl IntoView {
    let steps = [
        (Icon::Car, "Приезжайте на оценку", "Бесплатная диагностика за 15-20 минут"),
        (Icon::Gauge, "Получите предложение", "Честная рыночная цена без торга"),
        (Icon::RefreshCw, "Обменяйте авто", "Сумма идет в зачет нового автомобиля"),
    ];

    view! {
        <section id=Section::TradeIn.anchor() class="section">
            <div class="container">
                <div class="section-head">
                    <h2>"Trade-in: обмен с выгодой до 100 000 ₽"</h2>
                    <p class="muted">"Сдайте свой автомобиль в зачет и уезжайте на новом в тот же день."</p>
                </div>
                <div class="steps">
                    {steps
                        .into_iter()
                        .enumerate()
                        .map(|(index, (icon, title, text))| {
                            view! {
                                <div class="step">
                                    <span class="step-number">{index + 1}</span>
                                    <Glyph icon=icon size=28 />
                                    <h3>{title}</h3>
                                    <p class="muted">{text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <button class="btn btn-gold" on:click=move |_| dispatch(Action::OpenLead(LeadKind::TradeIn))>
                    "Оценить мой автомобиль"
                </button>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let facts = [
        (Icon::Trophy, "Лучший дилер 2023", "По версии Автостат"),
        (Icon::Users, "50 000+ клиентов", "Доверяют нам с 2009 года"),
        (Icon::Award, "Официальный партнер", "Ведущих автопроизводителей"),
        (Icon::TrendingUp, "1500+ авто", "В наличии на площадке"),
    ];

    view! {
        <section id=Section::About.anchor() class="section section-alt">
            <div class="container two-col">
                <div>
                    <h2>"О компании"</h2>
                    <p>
                        "Premium Auto работает на рынке более 15 лет. Мы продаем новые автомобили и машины с пробегом, каждая из которых проходит проверку по 120 параметрам."
                    </p>
                    <p class="muted">
                        "Собственный сервисный центр, кредитование в ведущих банках и программа Trade-in позволяют решить все вопросы в одном месте."
                    </p>
                </div>
                <div class="facts">
                    {facts
                        .into_iter()
                        .map(|(icon, title, text)| {
                            view! {
                                <div class="fact">
                                    <Glyph icon=icon size=24 />
                                    <b>{title}</b>
                                    <span class="muted">{text}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ReviewsSection() -> impl IntoView {
    view! {
        <section id=Section::Reviews.anchor() class="section">
            <div class="container">
                <div class="section-head">
                    <h2>"Отзывы клиентов"</h2>
                </div>
                <div class="reviews">
                    {REVIEWS
                        .iter()
                        .map(|review| {
                            view! {
                                <figure class="review">
                                    <Stars rating=review.rating />
                                    <blockquote>{review.text}</blockquote>
                                    <figcaption>
                                        <img src=review.image alt=review.name loading="lazy" />
                                        <div>
                                            <b>{review.name}</b>
                                            <span class="muted">{review.car}</span>
                                        </div>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Accordion; entries toggle independently
#[component]
pub fn FaqSection() -> impl IntoView {
    view! {
        <section class="section section-alt">
            <div class="container narrow">
                <div class="section-head">
                    <h2>"Частые вопросы"</h2>
                </div>
                {FAQ
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let open = select(move |s| s.faq_open.contains(&index));
                        view! {
                            <div class="faq" class:open=move || open.get()>
                                <button class="faq-question" on:click=move |_| dispatch(Action::ToggleFaq(index))>
                                    <span>{entry.question}</span>
                                    {move || {
                                        let icon = if open.get() { Icon::ChevronUp } else { Icon::ChevronDown };
                                        view! { <Glyph icon=icon size=20 /> }
                                    }}
                                </button>
                                <Show when=move || open.get()>
                                    <p class="faq-answer">{entry.answer}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div>
                    <a
                        href="#home"
                        class="logo"
                        on:click=move |ev| {
                            ev.prevent_default();
                            coordinator::navigate(Section::Home);
                        }
                    >
                        <Glyph icon=Icon::Car size=24 />
                        <span>"Premium"<b>"Auto"</b></span>
                    </a>
                    <p class="muted">"Премиальные автомобили с гарантией качества"</p>
                </div>
                <div class="footer-contacts">
                    <a href=config::PHONE_HREF>{config::PHONE_DISPLAY}</a>
                    <a href=format!("mailto:{}", config::EMAIL)>{config::EMAIL}</a>
                    <span class="muted">{config::ADDRESS}</span>
                </div>
            </div>
            <div class="container muted footer-copy">"© 2024 Premium Auto. Все права защищены."</div>
        </footer>
    }
}
