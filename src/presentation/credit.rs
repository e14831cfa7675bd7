use leptos::*;
use strum::IntoEnumIterator;

use crate::domain::{
    Action,
    content::Section,
    credit::{INITIAL_STEP, LoanTerm, MAX_PRICE, MIN_PRICE, PRICE_STEP},
    icons::Icon,
    leads::LeadKind,
};
use crate::format;
use crate::global_state::{dispatch, select};
use crate::presentation::widgets::Glyph;

fn parse_slider(raw: &str) -> Option<u64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0).map(|v| v as u64)
}

/// Loan calculator; the payment is recomputed on every slider move
#[component]
pub fn CreditSection() -> impl IntoView {
    let credit = select(|s| s.credit);

    let on_price = move |event: ev::Event| {
        if let Some(price) = parse_slider(&event_target_value(&event)) {
            dispatch(Action::SetCreditPrice(price));
        }
    };
    let on_initial = move |event: ev::Event| {
        if let Some(initial) = parse_slider(&event_target_value(&event)) {
            dispatch(Action::SetCreditInitial(initial));
        }
    };

    view! {
        <section id=Section::Credit.anchor() class="section section-alt">
            <div class="container two-col">
                <div>
                    <h2>"Кредитный калькулятор"</h2>
                    <p class="muted">"Ставка от 4,9% годовых. Одобрение за 5 минут без справок о доходах."</p>

                    <label class="slider">
                        <span class="slider-head">
                            "Стоимость автомобиля"
                            <b>{move || credit.get().price().to_string()}</b>
                        </span>
                        <input
                            type="range"
                            min=MIN_PRICE
                            max=MAX_PRICE
                            step=PRICE_STEP
                            prop:value=move || credit.get().price().value().to_string()
                            on:input=on_price
                        />
                    </label>

                    <label class="slider">
                        <span class="slider-head">
                            "Первоначальный взнос"
                            <b>{move || credit.get().initial().to_string()}</b>
                        </span>
                        <input
                            type="range"
                            min=0
                            max=move || credit.get().max_initial()
                            step=INITIAL_STEP
                            prop:value=move || credit.get().initial().value().to_string()
                            on:input=on_initial
                        />
                    </label>

                    <div class="terms">
                        <span class="slider-head">"Срок кредита"</span>
                        <div class="term-buttons">
                            {LoanTerm::iter()
                                .map(|term| {
                                    view! {
                                        <button
                                            class="term"
                                            class:active=move || credit.get().term() == term
                                            on:click=move |_| dispatch(Action::SetCreditTerm(term))
                                        >
                                            {term.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="payment-card">
                    <span class="muted">"Ежемесячный платеж"</span>
                    <div class="payment">{move || credit.get().monthly_payment().to_string()}</div>
                    <dl class="payment-breakdown">
                        <div>
                            <dt>"Сумма кредита"</dt>
                            <dd>{move || credit.get().principal().to_string()}</dd>
                        </div>
                        <div>
                            <dt>"Ставка"</dt>
                            <dd>{move || format!("{}%", format::decimal(credit.get().rate() as f32))}</dd>
                        </div>
                        <div>
                            <dt>"Срок"</dt>
                            <dd>{move || credit.get().term().label()}</dd>
                        </div>
                    </dl>
                    <button class="btn btn-gold btn-block" on:click=move |_| dispatch(Action::OpenLead(LeadKind::Credit))>
                        <Glyph icon=Icon::CheckCircle size=18 />
                        "Получить одобрение"
                    </button>
                </div>
            </div>
        </section>
    }
}
