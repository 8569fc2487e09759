//! Solutions for Advent of Code 2023.

pub mod almanac;
pub mod calibration;
pub mod camel;
pub mod cubes;
mod error;
pub mod network;
pub mod races;
pub mod schematic;
pub mod scratchcards;

pub use self::error::Error;
