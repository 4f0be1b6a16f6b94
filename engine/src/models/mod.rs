//! Domain models for the decision engine

mod assessment;
mod crop;
mod disease;
mod eco;
mod irrigation;
mod risk;
mod soil;
mod weather;
mod yield_forecast;

pub use assessment::*;
pub use crop::*;
pub use disease::*;
pub use eco::*;
pub use irrigation::*;
pub use risk::*;
pub use soil::*;
pub use weather::*;
pub use yield_forecast::*;
