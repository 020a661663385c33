pub mod actuation;
pub mod config;
pub mod error;
pub mod float_repr;
pub mod hazard;
pub mod polytope;
pub mod region;
pub mod state;

pub use actuation::*;
pub use config::*;
pub use error::*;
pub use hazard::*;
pub use polytope::*;
pub use region::*;
pub use state::*;
