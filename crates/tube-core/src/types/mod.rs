//! Core type definitions

mod dimensions;
mod pose;

pub use dimensions::*;
pub use pose::*;
