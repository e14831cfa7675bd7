use leptos::*;

use crate::application::coordinator;
use crate::domain::{
    Action, LeadField,
    icons::Icon,
    leads::{CALLBACK_SLOTS, CREDIT_AMOUNTS, CREDIT_INITIAL_SHARES, LeadDetails, LeadForm, LeadKind, TEST_DRIVE_HOURS},
};
use crate::global_state::{dispatch, select};
use crate::presentation::widgets::{Glyph, Modal};

fn field_value(form: &LeadForm, field: LeadField) -> String {
    match (field, &form.details) {
        (LeadField::Name, _) => form.name.clone(),
        (LeadField::Phone, _) => form.phone.clone(),
        (LeadField::Time, LeadDetails::Callback { time })
        | (LeadField::Time, LeadDetails::TestDrive { time, .. }) => time.clone(),
        (LeadField::Date, LeadDetails::TestDrive { date, .. }) => date.clone(),
        (LeadField::Car, LeadDetails::TestDrive { car, .. }) => car.clone(),
        (LeadField::Amount, LeadDetails::Credit { amount, .. }) => amount.clone(),
        (LeadField::Initial, LeadDetails::Credit { initial, .. }) => initial.clone(),
        _ => String::new(),
    }
}

#[component]
fn TextField(
    kind: LeadKind,
    field: LeadField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let value = select(move |s| field_value(&s.lead_form(kind), field));

    view! {
        <label class="form-row">
            <span>{label}</span>
            <input
                class="field"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| dispatch(Action::EditLead { kind, field, value: event_target_value(&ev) })
            />
        </label>
    }
}

#[component]
fn ChoiceField(
    kind: LeadKind,
    field: LeadField,
    label: &'static str,
    options: &'static [&'static str],
) -> impl IntoView {
    let value = select(move |s| field_value(&s.lead_form(kind), field));

    view! {
        <label class="form-row">
            <span>{label}</span>
            <select
                class="field"
                prop:value=move || value.get()
                on:change=move |ev| dispatch(Action::EditLead { kind, field, value: event_target_value(&ev) })
            >
                {options.iter().map(|option| view! { <option value=*option>{*option}</option> }).collect_view()}
            </select>
        </label>
    }
}

fn detail_fields(kind: LeadKind) -> View {
    match kind {
        LeadKind::Callback | LeadKind::TradeIn => view! {
            <ChoiceField kind=kind field=LeadField::Time label="Удобное время" options=CALLBACK_SLOTS />
        }
        .into_view(),
        LeadKind::TestDrive => view! {
            <TextField kind=kind field=LeadField::Car label="Автомобиль" placeholder="Марка и модель" />
            <TextField kind=kind field=LeadField::Date label="Дата" input_type="date" />
            <ChoiceField kind=kind field=LeadField::Time label="Время" options=TEST_DRIVE_HOURS />
        }
        .into_view(),
        LeadKind::Credit => view! {
            <ChoiceField kind=kind field=LeadField::Amount label="Сумма кредита" options=CREDIT_AMOUNTS />
            <ChoiceField kind=kind field=LeadField::Initial label="Первоначальный взнос" options=CREDIT_INITIAL_SHARES />
        }
        .into_view(),
    }
}

#[component]
fn LeadFormView(kind: LeadKind) -> impl IntoView {
    let status = select(move |s| s.submission(kind));

    view! {
        <Show
            when=move || status.with(|status| status.is_success())
            fallback=move || {
                view! {
                    <form
                        class="lead-form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            coordinator::submit_lead(kind);
                        }
                    >
                        <TextField kind=kind field=LeadField::Name label="Ваше имя" placeholder="Иван" />
                        <TextField
                            kind=kind
                            field=LeadField::Phone
                            label="Телефон"
                            input_type="tel"
                            placeholder="+7 (___) ___-__-__"
                        />
                        {detail_fields(kind)}
                        {move || {
                            status
                                .get()
                                .error_message()
                                .map(|message| {
                                    view! {
                                        <p class="form-error" role="alert">
                                            <Glyph icon=Icon::AlertCircle size=16 />
                                            {message.to_string()}
                                        </p>
                                    }
                                })
                        }}
                        <button
                            type="submit"
                            class="btn btn-gold btn-block"
                            disabled=move || status.with(|status| status.is_submitting())
                        >
                            {move || {
                                if status.with(|status| status.is_submitting()) {
                                    view! {
                                        <Glyph icon=Icon::Loader size=18 class="spin" />
                                        "Отправка..."
                                    }
                                    .into_view()
                                } else {
                                    kind.submit_label().into_view()
                                }
                            }}
                        </button>
                    </form>
                }
            }
        >
            <div class="lead-success">
                <Glyph icon=Icon::CheckCircle size=56 />
                <h3>"Заявка отправлена!"</h3>
                <p class="muted">"Мы свяжемся с вами в ближайшее время."</p>
                <button class="btn btn-outline" on:click=move |_| dispatch(Action::ResetLead(kind))>
                    "Отправить еще"
                </button>
            </div>
        </Show>
    }
}

/// The open lead form, if any
#[component]
pub fn LeadModal() -> impl IntoView {
    let open = select(|s| s.lead_modal);
    let close = Callback::new(|_| dispatch(Action::CloseLead));

    view! {
        {move || {
            open.get()
                .map(|kind| {
                    view! {
                        <Modal on_close=close>
                            <h2>{kind.title()}</h2>
                            <LeadFormView kind=kind />
                        </Modal>
                    }
                })
        }}
    }
}
