//! A small typed tree for the emitted module: type expressions, the handful of
//! expression forms a request function needs, and import/alias/function
//! declarations. Rendering to text lives in the emitter crate.

pub mod program;
pub mod types;

pub use program::*;
pub use types::*;
