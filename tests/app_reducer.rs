use premium_auto_wasm::domain::catalog::{FilterField, VehicleId};
use premium_auto_wasm::domain::comparison::CAPACITY_NOTICE;
use premium_auto_wasm::domain::content::Section;
use premium_auto_wasm::domain::credit::LoanTerm;
use premium_auto_wasm::domain::leads::{LeadDetails, LeadForm, LeadKind, SubmissionStatus};
use premium_auto_wasm::domain::{Action, AppState, LeadField, reduce};
use wasm_bindgen_test::*;

fn run(actions: impl IntoIterator<Item = Action>) -> AppState {
    actions.into_iter().fold(AppState::default(), reduce)
}

fn edit(kind: LeadKind, field: LeadField, value: &str) -> Action {
    Action::EditLead { kind, field, value: value.to_string() }
}

#[wasm_bindgen_test]
fn filter_actions_drive_visible_vehicles() {
    let state = run([Action::SetFilter { field: FilterField::BodyType, value: "sedan".to_string() }]);
    let ids: Vec<u32> = state.visible_vehicles().iter().map(|v| v.id.value()).collect();
    assert_eq!(ids, vec![2, 5]);

    let state = reduce(state, Action::ResetFilters);
    assert_eq!(state.visible_vehicles().len(), 6);
}

#[wasm_bindgen_test]
fn comparison_overflow_sets_notice_without_blocking() {
    let state = run((1..=5).map(|id| Action::ToggleCompare(VehicleId::from(id))));
    assert_eq!(state.comparison.len(), 4);
    assert_eq!(state.notice.as_deref(), Some(CAPACITY_NOTICE));

    let state = reduce(state, Action::DismissNotice);
    assert_eq!(state.notice, None);
}

#[wasm_bindgen_test]
fn removing_last_compared_vehicle_closes_table() {
    let state = run([Action::ToggleCompare(VehicleId::from(2)), Action::OpenComparison]);
    assert!(state.comparison_open);
    assert_eq!(state.compared_vehicles().len(), 1);

    let state = reduce(state, Action::ToggleCompare(VehicleId::from(2)));
    assert!(!state.comparison_open);
}

#[wasm_bindgen_test]
fn comparison_cannot_open_empty() {
    let state = run([Action::OpenComparison]);
    assert!(!state.comparison_open);
}

#[wasm_bindgen_test]
fn unknown_vehicle_takes_no_comparison_slot() {
    let state = run([
        Action::ToggleCompare(VehicleId::from(99)),
        Action::ToggleFavorite(VehicleId::from(99)),
        Action::OpenComparison,
    ]);
    assert!(state.comparison.is_empty());
    assert!(!state.favorites.contains(VehicleId::from(99)));
    assert!(!state.comparison_open);
    assert!(state.compared_vehicles().is_empty());
}

#[wasm_bindgen_test]
fn unknown_vehicle_is_not_selected() {
    let state = run([Action::ShowVehicle(VehicleId::from(42))]);
    assert_eq!(state.selected(), None);
}

#[wasm_bindgen_test]
fn test_drive_prefills_selected_car() {
    let state = run([Action::ShowVehicle(VehicleId::from(1)), Action::OpenLead(LeadKind::TestDrive)]);
    assert_eq!(state.lead_modal, Some(LeadKind::TestDrive));
    match state.lead_form(LeadKind::TestDrive).details {
        LeadDetails::TestDrive { car, .. } => assert_eq!(car, "BMW X5"),
        other => panic!("unexpected details {:?}", other),
    }
}

#[wasm_bindgen_test]
fn trade_in_closes_vehicle_details() {
    let state = run([Action::ShowVehicle(VehicleId::from(3)), Action::OpenLead(LeadKind::TradeIn)]);
    assert_eq!(state.selected_vehicle, None);
    assert_eq!(state.lead_modal, Some(LeadKind::TradeIn));
}

#[wasm_bindgen_test]
fn submit_without_name_fails_locally() {
    let state = run([Action::OpenLead(LeadKind::Callback), Action::SubmitLead(LeadKind::Callback)]);
    assert_eq!(
        state.submission(LeadKind::Callback),
        SubmissionStatus::Failed("Заполните поле «Ваше имя»".to_string())
    );
}

#[wasm_bindgen_test]
fn successful_submission_resets_form() {
    let kind = LeadKind::Credit;
    let state = run([
        edit(kind, LeadField::Name, "Иван"),
        edit(kind, LeadField::Phone, "+7 999 000-00-00"),
        edit(kind, LeadField::Amount, "1 000 000 - 3 000 000 ₽"),
        Action::SubmitLead(kind),
    ]);
    assert!(state.submission(kind).is_submitting());

    // A second click while in flight changes nothing.
    let state = reduce(state, Action::SubmitLead(kind));
    assert!(state.submission(kind).is_submitting());

    let state = reduce(state, Action::LeadSubmitted { kind, outcome: Ok(()) });
    assert!(state.submission(kind).is_success());
    assert_eq!(state.lead_form(kind), LeadForm::blank(kind));

    let state = reduce(state, Action::ResetLead(kind));
    assert_eq!(state.submission(kind), SubmissionStatus::Idle);
}

#[wasm_bindgen_test]
fn failed_submission_keeps_input() {
    let kind = LeadKind::Callback;
    let state = run([
        edit(kind, LeadField::Name, "Анна"),
        edit(kind, LeadField::Phone, "+7 900 111-22-33"),
        Action::SubmitLead(kind),
        Action::LeadSubmitted { kind, outcome: Err("Ошибка сети. Попробуйте снова.".to_string()) },
    ]);
    assert_eq!(state.submission(kind).error_message(), Some("Ошибка сети. Попробуйте снова."));
    assert_eq!(state.lead_form(kind).name, "Анна");
}

#[wasm_bindgen_test]
fn stale_completion_is_ignored() {
    let kind = LeadKind::TradeIn;
    let state = run([Action::LeadSubmitted { kind, outcome: Ok(()) }]);
    assert_eq!(state.submission(kind), SubmissionStatus::Idle);
}

#[wasm_bindgen_test]
fn forms_are_independent() {
    let state = run([edit(LeadKind::Callback, LeadField::Name, "Олег"), Action::SubmitLead(LeadKind::TestDrive)]);
    assert_eq!(state.lead_form(LeadKind::Callback).name, "Олег");
    assert_eq!(state.submission(LeadKind::Callback), SubmissionStatus::Idle);
    assert!(state.submission(LeadKind::TestDrive).error_message().is_some());
}

#[wasm_bindgen_test]
fn credit_actions_update_calculator() {
    let state = run([
        Action::SetCreditPrice(2_000_000),
        Action::SetCreditInitial(400_000),
        Action::SetCreditTerm(LoanTerm::Months36),
    ]);
    assert_eq!(state.credit.principal().value(), 1_600_000);
    assert_eq!(state.credit.term(), LoanTerm::Months36);
}

#[wasm_bindgen_test]
fn chat_reply_arrives_on_delivery() {
    let state = run([
        Action::ToggleChat,
        Action::EditChatDraft("Хочу обменять старый авто".to_string()),
        Action::SendChat,
    ]);
    assert!(state.chat.open);
    assert!(state.chat.typing);
    assert_eq!(state.chat.messages.len(), 2);

    let state = reduce(state, Action::DeliverChatReply);
    assert!(!state.chat.typing);
    assert!(state.chat.messages[2].text.contains("Trade-in"));
}

#[wasm_bindgen_test]
fn faq_entries_toggle_independently() {
    let state = run([Action::ToggleFaq(0), Action::ToggleFaq(2), Action::ToggleFaq(0)]);
    assert!(!state.faq_open.contains(&0));
    assert!(state.faq_open.contains(&2));
}

#[wasm_bindgen_test]
fn navigation_records_active_section() {
    let state = run([Action::NavigateTo(Section::Contacts)]);
    assert_eq!(state.active_section, Section::Contacts);
}

#[test]
fn state_serializes_for_debugging() {
    let state = run([Action::ToggleFavorite(VehicleId::from(1))]);
    let json = serde_json::to_value(&state).expect("state is serializable");
    assert_eq!(json["favorites"]["ids"], serde_json::json!([1]));
}
