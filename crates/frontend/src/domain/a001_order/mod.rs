//! Order lookup: one identifier in, one rendered order out.

pub mod backends;
pub mod display;
pub mod status;
pub mod ui;

#[cfg(test)]
pub(crate) mod fixtures;
