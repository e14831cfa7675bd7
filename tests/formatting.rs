use premium_auto_wasm::domain::catalog::{Rubles, VehicleId, find_vehicle};
use premium_auto_wasm::domain::content::count_up_value;
use premium_auto_wasm::domain::icons::Icon;
use premium_auto_wasm::format::{cars_found, decimal, group_thousands};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn found_counter_uses_russian_plurals() {
    assert_eq!(cars_found(0), "Найдено 0 автомобилей");
    assert_eq!(cars_found(1), "Найдено 1 автомобиль");
    assert_eq!(cars_found(3), "Найдено 3 автомобиля");
    assert_eq!(cars_found(6), "Найдено 6 автомобилей");
    assert_eq!(cars_found(11), "Найдено 11 автомобилей");
    assert_eq!(cars_found(21), "Найдено 21 автомобиль");
}

#[wasm_bindgen_test]
fn prices_group_by_thousands() {
    assert_eq!(group_thousands(1_500), "1\u{a0}500");
    assert_eq!(Rubles::new(15_060).to_string(), "15\u{a0}060 ₽");
    assert_eq!(decimal(2.1), "2,1");
    assert_eq!(decimal(0.0), "0");
}

#[wasm_bindgen_test]
fn discount_badge_and_savings() {
    let tesla = find_vehicle(VehicleId::from(5)).expect("Tesla in catalog");
    assert_eq!(tesla.discount_percent(), Some(7));
    assert_eq!(tesla.savings(), Some(Rubles::new(700_000)));

    let porsche = find_vehicle(VehicleId::from(4)).expect("Porsche in catalog");
    assert_eq!(porsche.discount_percent(), None);
    assert_eq!(porsche.mileage_label(), "Новый");
}

#[wasm_bindgen_test]
fn count_up_never_overshoots() {
    for elapsed in [0.0, 500.0, 1999.0, 2000.0, 10_000.0] {
        assert!(count_up_value(50_000, elapsed, 2000.0) <= 50_000);
    }
    assert_eq!(count_up_value(98, 2000.0, 2000.0), 98);
}

#[wasm_bindgen_test]
fn every_icon_maps_to_a_static_svg() {
    assert!(Icon::ALL.iter().all(|icon| icon.asset().starts_with("/icons/") && icon.asset().ends_with(".svg")));
    assert_eq!(Icon::Loader.asset(), "/icons/loader-2.svg");
}
