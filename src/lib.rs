//! **mazes** is a maze authoring library: a square grid maze model, a validator that reports every
//! problem at once, a topological analyser, a cell editor and a URL share token codec.
//!
//! Text or JSON goes through `validation::validate`, then `parser::parse` gives a `layout::Layout`.
//! An `editor::Editor` mutates its own copy of a layout and reports live status, and `share::encode`
//! turns the result back into something that fits in a URL.

pub mod analysis;
pub mod cells;
pub mod editor;
pub mod errors;
pub mod generators;
pub mod layout;
pub mod loader;
pub mod masks;
pub mod maze;
pub mod parser;
pub mod pathing;
pub mod share;
pub mod units;
pub mod validation;
mod utils;
