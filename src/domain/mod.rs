//! Core types: the notes Tree with its Section and Leaf nodes

mod tree;

pub use tree::{Leaf, Section, Tree};
