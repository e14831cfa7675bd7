use leptos::*;
use strum::IntoEnumIterator;

use crate::application::coordinator;
use crate::domain::{
    Action,
    catalog::{BodyType, Condition, EngineType, FilterField, Vehicle, brands},
    comparison::ComparisonRow,
    content::Section,
    icons::Icon,
    leads::LeadKind,
};
use crate::format;
use crate::global_state::{dispatch, select};
use crate::presentation::widgets::{Glyph, Modal};

#[component]
fn FilterSelect(
    field: FilterField,
    placeholder: &'static str,
    options: Vec<(String, &'static str)>,
) -> impl IntoView {
    let current = select(move |s| s.criteria.field_value(field));

    view! {
        <select
            class="field"
            prop:value=move || current.get()
            on:change=move |ev| dispatch(Action::SetFilter { field, value: event_target_value(&ev) })
        >
            <option value="">{placeholder}</option>
            {options
                .into_iter()
                .map(|(value, label)| view! { <option value=value>{label}</option> })
                .collect_view()}
        </select>
    }
}

#[component]
fn PriceInput(field: FilterField, placeholder: &'static str) -> impl IntoView {
    let current = select(move |s| s.criteria.field_value(field));

    view! {
        <input
            class="field"
            type="number"
            min="0"
            inputmode="numeric"
            placeholder=placeholder
            prop:value=move || current.get()
            on:input=move |ev| dispatch(Action::SetFilter { field, value: event_target_value(&ev) })
        />
    }
}

/// Quick-search panel; every change re-filters the grid immediately
#[component]
pub fn QuickSearch() -> impl IntoView {
    let brand_options = brands().into_iter().map(|brand| (brand.to_string(), brand)).collect::<Vec<_>>();
    let body_options = BodyType::iter().map(|v| (v.as_ref().to_string(), v.label())).collect::<Vec<_>>();
    let engine_options = EngineType::iter().map(|v| (v.as_ref().to_string(), v.label())).collect::<Vec<_>>();
    let condition_options = Condition::iter().map(|v| (v.as_ref().to_string(), v.label())).collect::<Vec<_>>();

    view! {
        <div class="quick-search">
            <h3>
                <Glyph icon=Icon::Search size=20 />
                "Быстрый поиск"
            </h3>
            <div class="quick-search-grid">
                <FilterSelect field=FilterField::Brand placeholder="Все марки" options=brand_options />
                <FilterSelect field=FilterField::BodyType placeholder="Любой кузов" options=body_options />
                <FilterSelect field=FilterField::Engine placeholder="Любой двигатель" options=engine_options />
                <FilterSelect field=FilterField::Condition placeholder="Любое состояние" options=condition_options />
                <PriceInput field=FilterField::PriceFrom placeholder="Цена от, ₽" />
                <PriceInput field=FilterField::PriceTo placeholder="Цена до, ₽" />
            </div>
            <button class="btn btn-gold" on:click=move |_| coordinator::navigate(Section::Catalog)>
                "Показать"
                <Glyph icon=Icon::ArrowRight size=18 />
            </button>
        </div>
    }
}

#[component]
fn VehicleCard(vehicle: &'static Vehicle) -> impl IntoView {
    let id = vehicle.id;
    let is_favorite = select(move |s| s.favorites.contains(id));
    let is_compared = select(move |s| s.comparison.contains(id));

    view! {
        <article class="card">
            <div class="card-media">
                <img src=vehicle.image.clone() alt=vehicle.display_name() loading="lazy" />
                {vehicle
                    .discount_percent()
                    .map(|percent| view! { <span class="badge badge-sale">{format!("-{}%", percent)}</span> })}
                <span class="badge badge-condition">{vehicle.condition.label()}</span>
                <div class="card-actions">
                    <button
                        class="icon-btn"
                        class:active=move || is_favorite.get()
                        aria-label="В избранное"
                        on:click=move |_| dispatch(Action::ToggleFavorite(id))
                    >
                        <Glyph icon=Icon::Heart size=18 />
                    </button>
                    <button
                        class="icon-btn"
                        class:active=move || is_compared.get()
                        aria-label="Сравнить"
                        on:click=move |_| dispatch(Action::ToggleCompare(id))
                    >
                        <Glyph icon=Icon::Compare size=18 />
                    </button>
                </div>
            </div>
            <div class="card-body">
                <h3>{vehicle.display_name()}</h3>
                <div class="card-meta">
                    <span>{vehicle.year}</span>
                    <span>{vehicle.mileage_label()}</span>
                    <span>{vehicle.engine.label()}</span>
                    <span>{format!("{} л.с.", vehicle.power)}</span>
                </div>
                <div class="card-price">
                    <span class="price">{vehicle.price.to_string()}</span>
                    {vehicle
                        .old_price
                        .filter(|_| vehicle.is_discounted())
                        .map(|old| view! { <span class="old-price">{old.to_string()}</span> })}
                </div>
                <button class="btn btn-outline btn-block" on:click=move |_| dispatch(Action::ShowVehicle(id))>
                    "Подробнее"
                </button>
            </div>
        </article>
    }
}

#[component]
pub fn CatalogSection() -> impl IntoView {
    let visible = select(|s| s.visible_vehicles());
    let filtered = select(|s| !s.criteria.is_empty());

    view! {
        <section id=Section::Catalog.anchor() class="section">
            <div class="container">
                <div class="section-head">
                    <h2>"Каталог автомобилей"</h2>
                    <p class="muted">{move || format::cars_found(visible.with(Vec::len))}</p>
                    <Show when=move || filtered.get()>
                        <button class="link-btn" on:click=move |_| dispatch(Action::ResetFilters)>
                            "Сбросить фильтры"
                        </button>
                    </Show>
                </div>
                <Show
                    when=move || visible.with(|list| !list.is_empty())
                    fallback=|| {
                        view! {
                            <div class="empty">
                                <Glyph icon=Icon::SearchX size=48 />
                                <h3>"По вашему запросу ничего не найдено"</h3>
                                <p class="muted">"Попробуйте изменить параметры поиска"</p>
                                <button class="btn btn-gold" on:click=move |_| dispatch(Action::ResetFilters)>
                                    "Сбросить фильтры"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="grid">
                        <For
                            each=move || visible.get()
                            key=|vehicle| vehicle.id
                            children=|vehicle| view! { <VehicleCard vehicle=vehicle /> }
                        />
                    </div>
                </Show>
            </div>
        </section>
    }
}

/// Floating button shown while the comparison set is non-empty
#[component]
pub fn CompareBar() -> impl IntoView {
    let count = select(|s| s.comparison.len());

    view! {
        <Show when=move || { count.get() > 0 }>
            <button class="compare-fab" on:click=move |_| dispatch(Action::OpenComparison)>
                <Glyph icon=Icon::Compare size=20 />
                {move || format!("Сравнить ({})", count.get())}
            </button>
        </Show>
    }
}

#[component]
pub fn ComparisonModal() -> impl IntoView {
    let open = select(|s| s.comparison_open);
    let vehicles = select(|s| s.compared_vehicles());
    let close = Callback::new(|_| dispatch(Action::CloseComparison));

    view! {
        <Show when=move || open.get()>
            <Modal on_close=close wide=true>
                <h2>"Сравнение автомобилей"</h2>
                <div class="table-scroll">
                    <table class="compare-table">
                        <thead>
                            <tr>
                                <th></th>
                                {move || {
                                    vehicles
                                        .get()
                                        .into_iter()
                                        .map(|vehicle| {
                                            let id = vehicle.id;
                                            view! {
                                                <th>
                                                    <img src=vehicle.image.clone() alt=vehicle.display_name() />
                                                    <div>{vehicle.display_name()}</div>
                                                    <button
                                                        class="link-btn"
                                                        on:click=move |_| dispatch(Action::ToggleCompare(id))
                                                    >
                                                        "Убрать"
                                                    </button>
                                                </th>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </tr>
                        </thead>
                        <tbody>
                            {ComparisonRow::all()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td class="muted">{row.label()}</td>
                                            {move || {
                                                vehicles
                                                    .get()
                                                    .into_iter()
                                                    .map(|vehicle| view! { <td>{row.cell(vehicle)}</td> })
                                                    .collect_view()
                                            }}
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
                <button class="btn btn-outline" on:click=move |_| dispatch(Action::ClearComparison)>
                    "Очистить сравнение"
                </button>
            </Modal>
        </Show>
    }
}

#[component]
pub fn VehicleModal() -> impl IntoView {
    let selected = select(|s| s.selected());
    let close = Callback::new(|_| dispatch(Action::CloseVehicle));

    let buy_on_credit = move |vehicle: &'static Vehicle| {
        dispatch(Action::SetCreditPrice(vehicle.price.value()));
        dispatch(Action::CloseVehicle);
        coordinator::navigate(Section::Credit);
    };

    view! {
        {move || {
            selected
                .get()
                .map(|vehicle| {
                    let specs = [
                        ("Год", vehicle.year.to_string()),
                        ("Пробег", vehicle.mileage_label()),
                        ("Двигатель", vehicle.engine.label().to_string()),
                        ("Мощность", format!("{} л.с.", vehicle.power)),
                        ("Коробка", vehicle.transmission.label().to_string()),
                        ("Привод", vehicle.drive.label().to_string()),
                        ("Разгон 0-100", format!("{} сек", format::decimal(vehicle.acceleration))),
                        ("Расход", format!("{} л/100км", format::decimal(vehicle.fuel_consumption))),
                        ("Макс. скорость", format!("{} км/ч", vehicle.max_speed)),
                        ("Цвет", vehicle.color.clone()),
                        ("Владельцев", vehicle.owners.to_string()),
                        ("Кузов", vehicle.body_type.label().to_string()),
                    ];
                    view! {
                        <Modal on_close=close wide=true>
                            <div class="details">
                                <img class="details-image" src=vehicle.image.clone() alt=vehicle.display_name() />
                                <div class="details-body">
                                    <h2>{vehicle.display_name()}</h2>
                                    <div class="card-price">
                                        <span class="price">{vehicle.price.to_string()}</span>
                                        {vehicle
                                            .savings()
                                            .map(|saving| {
                                                view! { <span class="badge badge-sale">{format!("Выгода {}", saving)}</span> }
                                            })}
                                    </div>
                                    <dl class="specs">
                                        {specs
                                            .into_iter()
                                            .map(|(label, value)| view! { <div><dt>{label}</dt><dd>{value}</dd></div> })
                                            .collect_view()}
                                    </dl>
                                    <ul class="features">
                                        {vehicle
                                            .features
                                            .iter()
                                            .map(|feature| {
                                                view! {
                                                    <li>
                                                        <Glyph icon=Icon::Check size=14 />
                                                        {feature.clone()}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                    <div class="details-actions">
                                        <button
                                            class="btn btn-gold"
                                            on:click=move |_| dispatch(Action::OpenLead(LeadKind::TestDrive))
                                        >
                                            "Записаться на тест-драйв"
                                        </button>
                                        <button class="btn btn-outline" on:click=move |_| buy_on_credit(vehicle)>
                                            "Рассчитать кредит"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </Modal>
                    }
                })
        }}
    }
}
