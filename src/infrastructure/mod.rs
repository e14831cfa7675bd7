//! Browser adapters: console logging, the form relay, the map and DOM helpers.

pub mod dom;
pub mod http;
pub mod map;
pub mod services;

pub use http::Web3FormsRelay;
pub use map::{MapBackend, MapConfig, MapHandle, MapLibreBackend, MapSlot};
pub use services::{BrowserTimeProvider, ConsoleLogger};
