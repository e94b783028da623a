//! Driving a match from outside the engine.
//!
//! - **console**: read typed commands, feed them to a `Match`, print the state
//! - **demo**: the fixed opening used for manual checks

pub mod console;
pub mod demo;

pub use console::run_console;
pub use demo::{scripted_demo, DemoStep};
