pub mod config;
pub mod constants;
pub mod gate;
pub mod meter;
pub mod panels;
pub mod reveal;
pub mod scatter;

pub use config::*;
pub use constants::*;
pub use gate::*;
pub use meter::*;
pub use panels::*;
pub use reveal::*;
pub use scatter::*;
