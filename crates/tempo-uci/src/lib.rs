//! UCI protocol handling for tempo.

pub mod command;
pub mod engine;
pub mod error;

pub use command::GoParams;
pub use engine::{EngineConfig, UciEngine};
pub use error::UciError;
