//! Pure model of the dealership site. Nothing in here performs I/O.

pub mod assistant;
pub mod catalog;
pub mod comparison;
pub mod content;
pub mod credit;
pub mod errors;
pub mod favorites;
pub mod icons;
pub mod leads;
pub mod logging;
pub mod state;

pub use state::{Action, AppState, LeadField, reduce};
