mod ai;
pub mod config;
pub mod tt;

pub use ai::*;
pub use config::*;
pub use tt::*;
