//! Agronomic decision engine for the Agro Advisor platform
//!
//! This crate holds the FAO-56 water-balance calculators, the FAO-33 yield
//! response model, the disease risk blend and the eco score, plus the
//! reference tables they run against. It is shared by the HTTP backend and
//! the WASM bindings and performs no I/O.

pub mod agronomy;
pub mod engine;
pub mod error;
pub mod models;
pub mod policy;
pub mod reference;
pub mod types;
pub mod validation;

pub use engine::AgronomicEngine;
pub use error::{EngineError, EngineResult};
pub use models::*;
pub use policy::*;
pub use reference::{Catalog, CatalogDocument, ReferenceTables, FALLBACK_CROP_ID};
pub use types::*;
