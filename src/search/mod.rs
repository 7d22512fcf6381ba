pub mod alpha_beta;
pub mod deepening;
pub mod evaluation;
pub mod move_ordering;
pub mod selection;
pub mod tree_log;

pub use alpha_beta::*;
pub use deepening::*;
pub use evaluation::*;
pub use move_ordering::*;
pub use selection::*;
pub use tree_log::*;
