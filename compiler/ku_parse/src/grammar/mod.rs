//! Grammar productions, each an `impl Parser` block.

mod expr;
mod item;
mod stmt;
mod ty;
