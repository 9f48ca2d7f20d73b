//! Core types for colloquy.

pub mod message;
pub mod stream;

pub use message::*;
pub use stream::*;
