//! A fixed display skeleton (open, print five times, close) with the steps
//! supplied by interchangeable renderers.

pub mod error;
pub mod output;
pub mod rendering;
