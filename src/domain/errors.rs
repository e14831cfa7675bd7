use derive_more::Display;

/// Message shown when the relay rejects a lead without saying why.
pub const GENERIC_FAILURE_MESSAGE: &str = "Что-то пошло не так";
/// Message shown for transport-level failures.
pub const NETWORK_FAILURE_MESSAGE: &str = "Ошибка сети. Попробуйте снова.";

/// Failures of a lead submission. None of them is fatal; each is scoped to one form.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LeadError {
    #[display(fmt = "Validation: field '{}' is required", _0)]
    MissingField(&'static str),
    #[display(fmt = "Network: {}", _0)]
    Network(String),
    #[display(fmt = "Timeout after {} ms", _0)]
    Timeout(u32),
    #[display(fmt = "Relay rejected submission: {:?}", _0)]
    Rejected(Option<String>),
    #[display(fmt = "Malformed relay response: {}", _0)]
    MalformedResponse(String),
}

impl LeadError {
    /// Localized text for the form's inline error area.
    pub fn user_message(&self) -> String {
        match self {
            LeadError::MissingField(field) => format!("Заполните поле «{}»", field_label(field)),
            LeadError::Rejected(Some(message)) if !message.trim().is_empty() => message.clone(),
            LeadError::Rejected(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            LeadError::Network(_) | LeadError::Timeout(_) | LeadError::MalformedResponse(_) => {
                NETWORK_FAILURE_MESSAGE.to_string()
            }
        }
    }

    /// Transport-level failures may be retried; a relay verdict is final.
    pub fn is_transient(&self) -> bool {
        matches!(self, LeadError::Network(_) | LeadError::Timeout(_))
    }
}

fn field_label(field: &str) -> &'static str {
    match field {
        "name" => "Ваше имя",
        "phone" => "Телефон",
        "date" => "Дата",
        _ => "обязательное поле",
    }
}

/// Problems found while validating the compiled-in catalog.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CatalogError {
    #[display(fmt = "Duplicate vehicle id {}", _0)]
    DuplicateId(u32),
    #[display(fmt = "Vehicle {} has old price {} not above price {}", id, old_price, price)]
    InvalidDiscount { id: u32, price: u64, old_price: u64 },
}

/// Failures acquiring the map rendering context.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MapError {
    #[display(fmt = "Map library unavailable: {}", _0)]
    Unavailable(String),
    #[display(fmt = "Map container missing")]
    MissingContainer,
}

impl std::error::Error for LeadError {}
impl std::error::Error for MapError {}
impl std::error::Error for CatalogError {}

pub type LeadResult<T> = Result<T, LeadError>;
