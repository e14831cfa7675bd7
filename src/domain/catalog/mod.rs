//! Catalog aggregate: vehicles, their value objects and the filter.

pub mod data;
pub mod entities;
pub mod services;
pub mod value_objects;

pub use data::{brands, catalog, find_vehicle};
pub use entities::*;
pub use services::*;
pub use value_objects::*;
