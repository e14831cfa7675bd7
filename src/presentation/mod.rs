//! Leptos components. They read state through `select` and write only via `dispatch`.

pub mod catalog;
pub mod chat;
pub mod contacts;
pub mod credit;
pub mod header;
pub mod leads;
pub mod sections;
pub mod widgets;
