use premium_auto_wasm::domain::catalog::{
    BodyType, Condition, EngineType, FilterCriteria, FilterField, Rubles, Vehicle, brands, catalog, filter_vehicles,
    parse_price_bound,
};
use wasm_bindgen_test::*;

fn ids(vehicles: &[&Vehicle]) -> Vec<u32> {
    vehicles.iter().map(|vehicle| vehicle.id.value()).collect()
}

fn criteria(pairs: &[(FilterField, &str)]) -> FilterCriteria {
    let mut criteria = FilterCriteria::default();
    for (field, value) in pairs {
        criteria.set_field(*field, value);
    }
    criteria
}

#[wasm_bindgen_test]
fn empty_criteria_show_whole_catalog_in_order() {
    let visible = filter_vehicles(catalog(), &FilterCriteria::default());
    assert_eq!(ids(&visible), vec![1, 2, 3, 4, 5, 6]);
}

#[wasm_bindgen_test]
fn body_type_and_upper_bound_combine() {
    let criteria = criteria(&[(FilterField::BodyType, "suv"), (FilterField::PriceTo, "7000000")]);
    assert_eq!(criteria.body_type, Some(BodyType::Suv));
    assert_eq!(ids(&filter_vehicles(catalog(), &criteria)), vec![3, 6]);
}

#[wasm_bindgen_test]
fn price_bounds_are_inclusive() {
    let from = criteria(&[(FilterField::PriceFrom, "8500000")]);
    assert_eq!(ids(&filter_vehicles(catalog(), &from)), vec![1, 4, 5]);

    let exact = criteria(&[(FilterField::PriceFrom, "5800000"), (FilterField::PriceTo, "5800000")]);
    assert_eq!(ids(&filter_vehicles(catalog(), &exact)), vec![6]);
}

#[wasm_bindgen_test]
fn engine_and_condition_filters() {
    let hybrids = criteria(&[(FilterField::Engine, "hybrid")]);
    assert_eq!(hybrids.engine, Some(EngineType::Hybrid));
    assert_eq!(ids(&filter_vehicles(catalog(), &hybrids)), vec![4, 6]);

    let new_cars = criteria(&[(FilterField::Condition, "new")]);
    assert_eq!(new_cars.condition, Some(Condition::New));
    assert_eq!(ids(&filter_vehicles(catalog(), &new_cars)), vec![2, 4]);
}

#[wasm_bindgen_test]
fn unknown_brand_yields_empty_result() {
    let criteria = criteria(&[(FilterField::Brand, "Lada")]);
    assert!(filter_vehicles(catalog(), &criteria).is_empty());
}

#[wasm_bindgen_test]
fn non_numeric_price_means_no_bound() {
    assert_eq!(parse_price_bound("abc"), None);
    assert_eq!(parse_price_bound(""), None);
    assert_eq!(parse_price_bound("inf"), None);
    assert_eq!(parse_price_bound(" 7000000 "), Some(Rubles::new(7_000_000)));

    let criteria = criteria(&[(FilterField::PriceTo, "дешево")]);
    assert!(criteria.is_empty());
    assert_eq!(filter_vehicles(catalog(), &criteria).len(), catalog().len());
}

#[wasm_bindgen_test]
fn out_of_range_and_fractional_prices_still_bound() {
    let huge = criteria(&[(FilterField::PriceFrom, "99999999999999999999")]);
    assert_eq!(huge.price_from, Some(Rubles::new(u64::MAX)));
    assert!(filter_vehicles(catalog(), &huge).is_empty());

    let fractional = criteria(&[(FilterField::PriceTo, "6000000.5")]);
    assert_eq!(fractional.price_to, Some(Rubles::new(6_000_000)));
    assert_eq!(ids(&filter_vehicles(catalog(), &fractional)), vec![6]);

    let negative = criteria(&[(FilterField::PriceTo, "-5")]);
    assert_eq!(negative.price_to, Some(Rubles::new(0)));
    assert!(filter_vehicles(catalog(), &negative).is_empty());
}

#[wasm_bindgen_test]
fn clearing_a_select_removes_the_constraint() {
    let mut criteria = criteria(&[(FilterField::Brand, "BMW")]);
    assert_eq!(ids(&filter_vehicles(catalog(), &criteria)), vec![1]);
    criteria.set_field(FilterField::Brand, "");
    assert!(criteria.is_empty());
}

#[wasm_bindgen_test]
fn brands_follow_catalog_order() {
    assert_eq!(brands(), vec!["BMW", "Mercedes", "Audi", "Porsche", "Tesla", "Lexus"]);
}
