pub mod board;
pub mod fingerprint;
pub mod position;
pub mod types;

pub use board::*;
pub use fingerprint::*;
pub use position::*;
pub use types::*;
