//! Whole-page state and the pure transition function driving it.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{
    assistant::ChatState,
    catalog::{self, FilterCriteria, FilterField, Vehicle, VehicleId},
    comparison::{CAPACITY_NOTICE, ComparisonSet, ToggleOutcome},
    content::Section,
    credit::{CreditCalculator, LoanTerm},
    favorites::FavoriteSet,
    leads::{LeadDetails, LeadForm, LeadKind, SubmissionStatus},
    logging::LogComponent,
};

/// Editable field of a lead form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadField {
    Name,
    Phone,
    Date,
    Time,
    Car,
    Amount,
    Initial,
}

/// Every user interaction and async completion the page reacts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    NavigateTo(Section),

    SetFilter { field: FilterField, value: String },
    ResetFilters,

    SetCreditPrice(u64),
    SetCreditInitial(u64),
    SetCreditTerm(LoanTerm),

    ToggleFavorite(VehicleId),
    ToggleCompare(VehicleId),
    ClearComparison,
    OpenComparison,
    CloseComparison,

    ShowVehicle(VehicleId),
    CloseVehicle,

    OpenLead(LeadKind),
    CloseLead,
    EditLead { kind: LeadKind, field: LeadField, value: String },
    SubmitLead(LeadKind),
    LeadSubmitted { kind: LeadKind, outcome: Result<(), String> },
    ResetLead(LeadKind),

    ToggleFaq(usize),

    ToggleChat,
    EditChatDraft(String),
    SendChat,
    DeliverChatReply,

    DismissNotice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub active_section: Section,
    pub criteria: FilterCriteria,
    pub credit: CreditCalculator,
    pub favorites: FavoriteSet,
    pub comparison: ComparisonSet,
    pub comparison_open: bool,
    pub selected_vehicle: Option<VehicleId>,
    pub lead_modal: Option<LeadKind>,
    pub lead_forms: BTreeMap<LeadKind, LeadForm>,
    pub submissions: BTreeMap<LeadKind, SubmissionStatus>,
    pub faq_open: BTreeSet<usize>,
    pub chat: ChatState,
    /// Inline, non-blocking message (e.g. comparison limit).
    pub notice: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_section: Section::Home,
            criteria: FilterCriteria::default(),
            credit: CreditCalculator::default(),
            favorites: FavoriteSet::default(),
            comparison: ComparisonSet::default(),
            comparison_open: false,
            selected_vehicle: None,
            lead_modal: None,
            lead_forms: BTreeMap::new(),
            submissions: BTreeMap::new(),
            faq_open: BTreeSet::new(),
            chat: ChatState::default(),
            notice: None,
        }
    }
}

impl AppState {
    pub fn visible_vehicles(&self) -> Vec<&'static Vehicle> {
        catalog::filter_vehicles(catalog::catalog(), &self.criteria)
    }

    pub fn compared_vehicles(&self) -> Vec<&'static Vehicle> {
        self.comparison.ids().iter().filter_map(|id| catalog::find_vehicle(*id)).collect()
    }

    pub fn selected(&self) -> Option<&'static Vehicle> {
        self.selected_vehicle.and_then(catalog::find_vehicle)
    }

    /// Current draft of a form, blank if never edited.
    pub fn lead_form(&self, kind: LeadKind) -> LeadForm {
        self.lead_forms.get(&kind).cloned().unwrap_or_else(|| LeadForm::blank(kind))
    }

    pub fn submission(&self, kind: LeadKind) -> SubmissionStatus {
        self.submissions.get(&kind).cloned().unwrap_or_default()
    }

    fn lead_form_mut(&mut self, kind: LeadKind) -> &mut LeadForm {
        self.lead_forms.entry(kind).or_insert_with(|| LeadForm::blank(kind))
    }
}

/// Pure transition: `(state, action) -> state`.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    crate::log_debug!(LogComponent::Domain("Reducer"), "{:?}", action);

    match action {
        Action::NavigateTo(section) => state.active_section = section,

        Action::SetFilter { field, value } => state.criteria.set_field(field, &value),
        Action::ResetFilters => state.criteria = FilterCriteria::default(),

        Action::SetCreditPrice(price) => state.credit.set_price(price),
        Action::SetCreditInitial(initial) => state.credit.set_initial(initial),
        Action::SetCreditTerm(term) => state.credit.set_term(term),

        Action::ToggleFavorite(id) | Action::ToggleCompare(id) if catalog::find_vehicle(id).is_none() => {
            crate::log_warn!(LogComponent::Domain("Reducer"), "ignoring unknown vehicle {}", id);
        }
        Action::ToggleFavorite(id) => {
            state.favorites.toggle(id);
        }
        Action::ToggleCompare(id) => match state.comparison.toggle(id) {
            ToggleOutcome::CapacityReached => {
                crate::log_info!(LogComponent::Domain("Comparison"), "rejected {}: set is full", id);
                state.notice = Some(CAPACITY_NOTICE.to_string());
            }
            ToggleOutcome::Removed if state.comparison.is_empty() => {
                state.comparison_open = false;
                state.notice = None;
            }
            ToggleOutcome::Added | ToggleOutcome::Removed => state.notice = None,
        },
        Action::ClearComparison => {
            state.comparison.clear();
            state.comparison_open = false;
        }
        Action::OpenComparison => state.comparison_open = !state.comparison.is_empty(),
        Action::CloseComparison => state.comparison_open = false,

        Action::ShowVehicle(id) => {
            state.selected_vehicle = catalog::find_vehicle(id).map(|vehicle| vehicle.id);
        }
        Action::CloseVehicle => state.selected_vehicle = None,

        Action::OpenLead(kind) => {
            if kind == LeadKind::TradeIn {
                state.selected_vehicle = None;
            }
            if let (LeadKind::TestDrive, Some(vehicle)) = (kind, state.selected()) {
                let form = state.lead_form_mut(kind);
                if let LeadDetails::TestDrive { car, .. } = &mut form.details {
                    if car.trim().is_empty() {
                        *car = vehicle.display_name();
                    }
                }
            }
            state.lead_modal = Some(kind);
        }
        Action::CloseLead => state.lead_modal = None,
        Action::EditLead { kind, field, value } => apply_lead_edit(state.lead_form_mut(kind), field, value),
        Action::SubmitLead(kind) => {
            if state.submission(kind).is_submitting() {
                return state;
            }
            let status = match state.lead_form(kind).validate() {
                Ok(()) => SubmissionStatus::Submitting,
                Err(e) => SubmissionStatus::Failed(e.user_message()),
            };
            state.submissions.insert(kind, status);
        }
        Action::LeadSubmitted { kind, outcome } => {
            // A late completion for a form that was reset meanwhile is dropped.
            if !state.submission(kind).is_submitting() {
                return state;
            }
            let status = match outcome {
                Ok(()) => {
                    state.lead_forms.insert(kind, LeadForm::blank(kind));
                    SubmissionStatus::Succeeded
                }
                Err(message) => SubmissionStatus::Failed(message),
            };
            state.submissions.insert(kind, status);
        }
        Action::ResetLead(kind) => {
            state.submissions.insert(kind, SubmissionStatus::Idle);
        }

        Action::ToggleFaq(index) => {
            if !state.faq_open.remove(&index) {
                state.faq_open.insert(index);
            }
        }

        Action::ToggleChat => state.chat.open = !state.chat.open,
        Action::EditChatDraft(text) => state.chat.draft = text,
        Action::SendChat => {
            state.chat.send();
        }
        Action::DeliverChatReply => {
            state.chat.deliver_next();
        }

        Action::DismissNotice => state.notice = None,
    }

    state
}

fn apply_lead_edit(form: &mut LeadForm, field: LeadField, value: String) {
    match (field, &mut form.details) {
        (LeadField::Name, _) => form.name = value,
        (LeadField::Phone, _) => form.phone = value,
        (LeadField::Time, LeadDetails::Callback { time })
        | (LeadField::Time, LeadDetails::TestDrive { time, .. }) => *time = value,
        (LeadField::Date, LeadDetails::TestDrive { date, .. }) => *date = value,
        (LeadField::Car, LeadDetails::TestDrive { car, .. }) => *car = value,
        (LeadField::Amount, LeadDetails::Credit { amount, .. }) => *amount = value,
        (LeadField::Initial, LeadDetails::Credit { initial, .. }) => *initial = value,
        (field, _) => {
            crate::log_warn!(
                LogComponent::Domain("Leads"),
                "field {:?} does not belong to {:?} form",
                field,
                form.kind
            );
        }
    }
}
