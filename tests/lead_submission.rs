use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::sync::Mutex;

use futures::executor::block_on;
use premium_auto_wasm::application::SubmitLeadUseCase;
use premium_auto_wasm::domain::errors::{GENERIC_FAILURE_MESSAGE, LeadError, LeadResult, NETWORK_FAILURE_MESSAGE};
use premium_auto_wasm::domain::leads::{LeadDetails, LeadForm, LeadKind, LeadRelay, RelayResponse};
use premium_auto_wasm::domain::logging::{LogEntry, Logger, init_logger};

/// Replays scripted relay outcomes and records every payload it was sent
#[derive(Default)]
struct ScriptedRelay {
    outcomes: RefCell<VecDeque<LeadResult<RelayResponse>>>,
    calls: Cell<u32>,
    last_fields: RefCell<Vec<(&'static str, String)>>,
}

impl ScriptedRelay {
    fn new(outcomes: impl IntoIterator<Item = LeadResult<RelayResponse>>) -> Self {
        Self { outcomes: RefCell::new(outcomes.into_iter().collect()), ..Self::default() }
    }
}

impl LeadRelay for ScriptedRelay {
    async fn send(&self, fields: &[(&'static str, String)]) -> LeadResult<RelayResponse> {
        self.calls.set(self.calls.get() + 1);
        *self.last_fields.borrow_mut() = fields.to_vec();
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(LeadError::Network("script exhausted".to_string())))
    }
}

fn accepted() -> LeadResult<RelayResponse> {
    RelayResponse::parse(r#"{"success": true, "message": "Email sent successfully!"}"#)
}

fn callback_form() -> LeadForm {
    let mut form = LeadForm::blank(LeadKind::Callback);
    form.name = " Иван ".to_string();
    form.phone = "+7 999 000-00-00".to_string();
    form
}

fn use_case(relay: ScriptedRelay) -> SubmitLeadUseCase<ScriptedRelay> {
    SubmitLeadUseCase::new(relay, "test-key", 1)
}

#[test]
fn accepted_on_first_attempt() {
    let use_case = use_case(ScriptedRelay::new([accepted()]));
    assert_eq!(block_on(use_case.execute(&callback_form())), Ok(()));
    assert_eq!(use_case.relay().calls.get(), 1);
}

#[test]
fn transport_failure_is_retried_once() {
    let use_case = use_case(ScriptedRelay::new([Err(LeadError::Network("offline".to_string())), accepted()]));
    assert_eq!(block_on(use_case.execute(&callback_form())), Ok(()));
    assert_eq!(use_case.relay().calls.get(), 2);
}

#[test]
fn timeout_is_retried_then_reported() {
    let use_case = use_case(ScriptedRelay::new([Err(LeadError::Timeout(10_000)), Err(LeadError::Timeout(10_000))]));
    let error = block_on(use_case.execute(&callback_form())).unwrap_err();
    assert_eq!(error, LeadError::Timeout(10_000));
    assert_eq!(error.user_message(), NETWORK_FAILURE_MESSAGE);
    assert_eq!(use_case.relay().calls.get(), 2);
}

#[test]
fn relay_rejection_is_final_and_surfaces_message() {
    let rejected = RelayResponse::parse(r#"{"success": false, "message": "Invalid access key"}"#);
    let use_case = use_case(ScriptedRelay::new([rejected, accepted()]));
    let error = block_on(use_case.execute(&callback_form())).unwrap_err();
    assert_eq!(error.user_message(), "Invalid access key");
    assert_eq!(use_case.relay().calls.get(), 1);
}

#[test]
fn malformed_body_is_not_retried() {
    let use_case = use_case(ScriptedRelay::new([RelayResponse::parse("<html>502</html>"), accepted()]));
    let error = block_on(use_case.execute(&callback_form())).unwrap_err();
    assert!(matches!(error, LeadError::MalformedResponse(_)));
    assert_eq!(use_case.relay().calls.get(), 1);
}

#[test]
fn invalid_form_never_reaches_relay() {
    let use_case = use_case(ScriptedRelay::new([accepted()]));
    let error = block_on(use_case.execute(&LeadForm::blank(LeadKind::TestDrive))).unwrap_err();
    assert_eq!(error, LeadError::MissingField("name"));
    assert_eq!(use_case.relay().calls.get(), 0);
}

#[test]
fn payload_carries_key_subject_and_trimmed_fields() {
    let use_case = use_case(ScriptedRelay::new([accepted()]));
    block_on(use_case.execute(&callback_form())).expect("accepted");
    let fields = use_case.relay().last_fields.borrow().clone();
    assert_eq!(fields[0], ("access_key", "test-key".to_string()));
    assert_eq!(fields[1], ("subject", "Заявка на обратный звонок".to_string()));
    assert_eq!(fields[2], ("name", "Иван".to_string()));
    assert_eq!(fields[4], ("time", "Сейчас".to_string()));
}

#[test]
fn test_drive_payload_snapshot() {
    let mut form = LeadForm::blank(LeadKind::TestDrive);
    form.name = "Иван".to_string();
    form.phone = "+7 999 000-00-00".to_string();
    form.details = LeadDetails::TestDrive {
        date: "2024-06-01".to_string(),
        time: "12:00".to_string(),
        car: "BMW X5".to_string(),
    };
    assert_eq!(form.validate(), Ok(()));

    let rendered = form
        .to_fields("test-key")
        .into_iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(rendered, @r"
    access_key=test-key
    subject=Запись на тест-драйв
    name=Иван
    phone=+7 999 000-00-00
    date=2024-06-01
    time=12:00
    car=BMW X5
    ");
}

#[test]
fn test_drive_requires_date() {
    let mut form = LeadForm::blank(LeadKind::TestDrive);
    form.name = "Иван".to_string();
    form.phone = "+7 999".to_string();
    assert_eq!(form.validate(), Err(LeadError::MissingField("date")));
}

#[test]
fn only_literal_true_counts_as_success() {
    assert_eq!(RelayResponse::parse(r#"{"success": true}"#).and_then(RelayResponse::into_result), Ok(()));
    assert_eq!(
        RelayResponse::parse(r#"{"success": "true"}"#).and_then(RelayResponse::into_result),
        Err(LeadError::Rejected(None))
    );
    assert_eq!(
        RelayResponse::parse(r#"{"message": "oops"}"#).and_then(RelayResponse::into_result),
        Err(LeadError::Rejected(Some("oops".to_string())))
    );
}

#[test]
fn rejection_without_message_uses_generic_text() {
    assert_eq!(LeadError::Rejected(None).user_message(), GENERIC_FAILURE_MESSAGE);
    assert_eq!(LeadError::Rejected(Some("  ".to_string())).user_message(), GENERIC_FAILURE_MESSAGE);
    assert!(!LeadError::Rejected(None).is_transient());
    assert!(LeadError::Network("x".to_string()).is_transient());
}

static LOG_LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());

/// Keeps rendered log lines so tests can inspect them
struct RecordingLogger;

impl Logger for RecordingLogger {
    fn log(&self, entry: LogEntry) {
        if let Ok(mut lines) = LOG_LINES.lock() {
            lines.push(entry.render());
        }
    }
}

#[test]
fn outcome_log_carries_attempt_count() {
    init_logger(Box::new(RecordingLogger));
    let use_case = use_case(ScriptedRelay::new([Err(LeadError::Timeout(10_000)), accepted()]));
    assert_eq!(block_on(use_case.execute(&callback_form())), Ok(()));

    let lines = LOG_LINES.lock().expect("log lines");
    assert!(
        lines.iter().any(|line| line.contains("APP:SubmitLead | 📨 Callback lead accepted | attempt 2/2")),
        "{:#?}",
        *lines
    );
}
