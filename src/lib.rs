// Lance - núcleo de escolha de lances por Minimax com podas Alpha-Beta

pub mod core;
pub mod engine;
pub mod error;
pub mod moves;
pub mod search;

pub use self::core::*;
pub use engine::{Engine, EngineConfig};
pub use error::EngineError;
