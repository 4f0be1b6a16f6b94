//! Business logic services for the Agro Advisor server

pub mod advisory;

pub use advisory::AdvisoryService;
