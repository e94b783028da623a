//! Card values.

mod card;

pub use card::{Card, Color, Number};
