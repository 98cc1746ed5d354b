#![doc = include_str!("../README.md")]

#[cfg(test)]
#[macro_use]
extern crate approx;

mod assign;
mod edges;

pub use assign::assign_bins;
pub use edges::Edges;
