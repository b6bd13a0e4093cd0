#![allow(clippy::module_inception)]
mod stencil;

pub mod standard_reducers;

pub use stencil::*;
