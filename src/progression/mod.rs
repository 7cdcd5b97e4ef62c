//! Achievement progression

pub mod evaluator;

pub use evaluator::{evaluate, is_met};
