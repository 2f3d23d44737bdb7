pub mod initialise_config;
pub mod transfer_sol;

pub use initialise_config::*;
pub use transfer_sol::*;
