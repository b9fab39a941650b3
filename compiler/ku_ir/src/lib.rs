//! ku IR - shared data types for the ku front end.
//!
//! This crate contains the types the scanner and parser exchange:
//! - [`Position`] for 1-based line/column locations
//! - [`TokenKind`] and [`Token`], plus the one-line token dump format
//! - AST nodes ([`SourceTree`], [`FunctionDefinition`], [`Statement`], ...)
//! - [`Seq`], the growable sequence used by every AST list
//!
//! # Lifetimes
//!
//! Tokens and AST leaves borrow their text from the source buffer. Every
//! type that holds source bytes carries a `'src` lifetime, so the buffer
//! provably outlives the tree built from it.

pub mod ast;
mod position;
mod seq;
mod token;

pub use ast::{
    Block, CallExpression, DefineStatement, Expression, FunctionDeclaration, FunctionDefinition,
    FunctionResult, Identifier, Literal, ParameterDeclaration, SourceTree, Statement, TypeLiteral,
    TypeName, TypeSpecifier,
};
pub use position::Position;
pub use seq::Seq;
pub use token::{Token, TokenKind};
