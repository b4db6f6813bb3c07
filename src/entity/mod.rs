//! SeaORM entity definitions.

pub mod hero;
