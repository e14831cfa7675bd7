use premium_auto_wasm::domain::catalog::{VehicleId, find_vehicle};
use premium_auto_wasm::domain::comparison::{COMPARISON_CAPACITY, ComparisonRow, ComparisonSet, ToggleOutcome};
use premium_auto_wasm::domain::favorites::FavoriteSet;
use wasm_bindgen_test::*;

fn id(value: u32) -> VehicleId {
    VehicleId::from(value)
}

#[wasm_bindgen_test]
fn fifth_vehicle_is_rejected_without_change() {
    let mut set = ComparisonSet::default();
    for value in 1..=4 {
        assert_eq!(set.toggle(id(value)), ToggleOutcome::Added);
    }
    assert_eq!(set.toggle(id(5)), ToggleOutcome::CapacityReached);
    assert_eq!(set.len(), COMPARISON_CAPACITY);
    assert!(!set.contains(id(5)));
}

#[wasm_bindgen_test]
fn removal_frees_a_slot_and_keeps_order() {
    let mut set = ComparisonSet::default();
    for value in [3, 1, 6, 2] {
        set.toggle(id(value));
    }
    assert_eq!(set.toggle(id(1)), ToggleOutcome::Removed);
    assert_eq!(set.toggle(id(5)), ToggleOutcome::Added);
    assert_eq!(set.ids(), &[id(3), id(6), id(2), id(5)]);
}

#[wasm_bindgen_test]
fn clear_empties_the_set() {
    let mut set = ComparisonSet::default();
    set.toggle(id(1));
    set.toggle(id(2));
    set.clear();
    assert!(set.is_empty());
}

#[wasm_bindgen_test]
fn table_rows_render_localized_cells() {
    let bmw = find_vehicle(id(1)).expect("BMW in catalog");
    let mercedes = find_vehicle(id(2)).expect("Mercedes in catalog");

    let labels: Vec<_> = ComparisonRow::all().map(|row| row.label()).collect();
    assert_eq!(labels, vec!["Цена", "Год", "Мощность", "Пробег", "Разгон", "Расход"]);

    assert_eq!(ComparisonRow::Price.cell(bmw), "8\u{a0}500\u{a0}000 ₽");
    assert_eq!(ComparisonRow::Power.cell(bmw), "340 л.с.");
    assert_eq!(ComparisonRow::Mileage.cell(bmw), "15\u{a0}000 км");
    assert_eq!(ComparisonRow::Mileage.cell(mercedes), "Новый");
    assert_eq!(ComparisonRow::Acceleration.cell(bmw), "5,5 сек");
    assert_eq!(ComparisonRow::FuelConsumption.cell(bmw), "9,2 л/100км");
}

#[wasm_bindgen_test]
fn favorites_are_independent_of_comparison() {
    let mut favorites = FavoriteSet::default();
    let mut comparison = ComparisonSet::default();
    favorites.toggle(id(4));
    assert!(favorites.contains(id(4)));
    assert!(!comparison.contains(id(4)));
    comparison.toggle(id(4));
    assert!(!favorites.toggle(id(4)));
    assert!(comparison.contains(id(4)));
    assert_eq!(favorites.len(), 0);
}
