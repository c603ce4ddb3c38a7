//! Line normalization, token access and value conversion helpers

pub mod convert;
pub mod line;
pub mod text;

pub use convert::*;
pub use line::*;
