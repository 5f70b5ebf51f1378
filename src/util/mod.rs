//! Random instance generation for tests and benchmarks.
pub mod board_gen;
