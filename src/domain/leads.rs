//! Lead-capture forms, their payload and the relay verdict.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

use crate::domain::errors::{LeadError, LeadResult};

pub const CALLBACK_SLOTS: &[&str] = &[
    "Сейчас",
    "10:00 - 12:00",
    "12:00 - 14:00",
    "14:00 - 16:00",
    "16:00 - 18:00",
    "18:00 - 20:00",
];

pub const TEST_DRIVE_HOURS: &[&str] = &[
    "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00", "18:00", "19:00",
];

pub const CREDIT_AMOUNTS: &[&str] = &[
    "500 000 - 1 000 000 ₽",
    "1 000 000 - 3 000 000 ₽",
    "3 000 000 - 5 000 000 ₽",
    "5 000 000 - 10 000 000 ₽",
    "Более 10 000 000 ₽",
];

pub const CREDIT_INITIAL_SHARES: &[&str] = &["0% (без взноса)", "10%", "20%", "30%", "50% и более"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum LeadKind {
    Callback,
    TestDrive,
    Credit,
    TradeIn,
}

impl LeadKind {
    /// Hidden `subject` field sent with the form.
    pub fn subject(&self) -> &'static str {
        match self {
            Self::Callback => "Заявка на обратный звонок",
            Self::TestDrive => "Запись на тест-драйв",
            Self::Credit => "Заявка на кредит",
            Self::TradeIn => "Оценка автомобиля по Trade-in",
        }
    }

    /// Modal heading.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Callback => "Обратный звонок",
            Self::TestDrive => "Запись на тест-драйв",
            Self::Credit => "Заявка на кредит",
            Self::TradeIn => "Оценка по Trade-in",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Callback | Self::TradeIn => "Позвоните мне",
            Self::TestDrive => "Записаться",
            Self::Credit => "Получить одобрение",
        }
    }
}

/// What the visitor typed into one of the lead modals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadForm {
    pub kind: LeadKind,
    pub name: String,
    pub phone: String,
    pub details: LeadDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LeadDetails {
    Callback { time: String },
    TestDrive { date: String, time: String, car: String },
    Credit { amount: String, initial: String },
}

impl LeadForm {
    /// Empty form with each select preset to its first option.
    pub fn blank(kind: LeadKind) -> Self {
        let details = match kind {
            LeadKind::Callback | LeadKind::TradeIn => {
                LeadDetails::Callback { time: CALLBACK_SLOTS[0].to_string() }
            }
            LeadKind::TestDrive => LeadDetails::TestDrive {
                date: String::new(),
                time: TEST_DRIVE_HOURS[0].to_string(),
                car: String::new(),
            },
            LeadKind::Credit => LeadDetails::Credit {
                amount: CREDIT_AMOUNTS[0].to_string(),
                initial: CREDIT_INITIAL_SHARES[0].to_string(),
            },
        };
        Self { kind, name: String::new(), phone: String::new(), details }
    }

    pub fn validate(&self) -> LeadResult<()> {
        if self.name.trim().is_empty() {
            return Err(LeadError::MissingField("name"));
        }
        if self.phone.trim().is_empty() {
            return Err(LeadError::MissingField("phone"));
        }
        if let LeadDetails::TestDrive { date, .. } = &self.details {
            if date.trim().is_empty() {
                return Err(LeadError::MissingField("date"));
            }
        }
        Ok(())
    }

    /// Form-encoded payload in the order the relay e-mail lists them.
    pub fn to_fields(&self, access_key: &str) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("access_key", access_key.to_string()),
            ("subject", self.kind.subject().to_string()),
            ("name", self.name.trim().to_string()),
            ("phone", self.phone.trim().to_string()),
        ];
        match &self.details {
            LeadDetails::Callback { time } => fields.push(("time", time.clone())),
            LeadDetails::TestDrive { date, time, car } => {
                fields.push(("date", date.clone()));
                fields.push(("time", time.clone()));
                if !car.trim().is_empty() {
                    fields.push(("car", car.trim().to_string()));
                }
            }
            LeadDetails::Credit { amount, initial } => {
                fields.push(("amount", amount.clone()));
                fields.push(("initial", initial.clone()));
            }
        }
        fields
    }
}

/// Body returned by the relay endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelayResponse {
    #[serde(default)]
    pub success: serde_json::Value,
    #[serde(default)]
    pub message: Option<String>,
}

impl RelayResponse {
    pub fn parse(body: &str) -> LeadResult<Self> {
        serde_json::from_str(body).map_err(|e| LeadError::MalformedResponse(e.to_string()))
    }

    /// Only a literal boolean `true` counts as success.
    pub fn into_result(self) -> LeadResult<()> {
        if self.success == serde_json::Value::Bool(true) {
            Ok(())
        } else {
            Err(LeadError::Rejected(self.message))
        }
    }
}

/// Outbound port to the third-party form relay
#[allow(async_fn_in_trait)]
pub trait LeadRelay {
    /// One attempt. Transport problems are `Network`/`Timeout`, an unreadable body is
    /// `MalformedResponse`; a well-formed body is returned as-is for interpretation.
    async fn send(&self, fields: &[(&'static str, String)]) -> LeadResult<RelayResponse>;
}

/// Lifecycle of one form's submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_forms_preselect_first_option() {
        let form = LeadForm::blank(LeadKind::Credit);
        assert_eq!(
            form.details,
            LeadDetails::Credit {
                amount: "500 000 - 1 000 000 ₽".to_string(),
                initial: "0% (без взноса)".to_string(),
            }
        );
    }

    #[test]
    fn trade_in_reuses_callback_fields() {
        let form = LeadForm::blank(LeadKind::TradeIn);
        assert!(matches!(form.details, LeadDetails::Callback { .. }));
    }
}
