//! Application layer: the ordering engine

pub mod engine;

pub use engine::OrderingEngine;
