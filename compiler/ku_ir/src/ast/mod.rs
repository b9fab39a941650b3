//! AST node types.
//!
//! Each syntactic category is a closed enum. Leaves borrow their text from
//! the source buffer through `'src`; recursive payloads are boxed. Nodes are
//! built once by the parser and never mutated afterwards.

mod pretty;


use std::borrow::Cow;

use crate::{Position, Seq, Token};

/// A name as written in the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier<'src> {
    pub name: &'src [u8],
    pub pos: Position,
}

impl<'src> Identifier<'src> {
    #[inline]
    pub const fn new(name: &'src [u8], pos: Position) -> Self {
        Identifier { name, pos }
    }

    /// Identifier spelled by `token`'s source text.
    #[inline]
    pub fn from_token(token: &Token<'src>) -> Self {
        Identifier {
            name: token.text(),
            pos: token.pos,
        }
    }

    /// Name as text; invalid UTF-8 is replaced.
    pub fn as_str(&self) -> Cow<'src, str> {
        String::from_utf8_lossy(self.name)
    }
}

/// Raw literal text (integer digits, or a string including its quotes).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal<'src> {
    pub raw: &'src [u8],
    pub pos: Position,
}

impl<'src> Literal<'src> {
    #[inline]
    pub fn from_token(token: &Token<'src>) -> Self {
        Literal {
            raw: token.text(),
            pos: token.pos,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression<'src> {
    Identifier(Identifier<'src>),
    IntegerLiteral(Literal<'src>),
    StringLiteral(Literal<'src>),
    Call(Box<CallExpression<'src>>),
}

impl<'src> Expression<'src> {
    pub fn call(callee: Identifier<'src>, arguments: Seq<Expression<'src>>) -> Self {
        Expression::Call(Box::new(CallExpression { callee, arguments }))
    }

    /// Position of the first token of the expression.
    pub fn pos(&self) -> Position {
        match self {
            Expression::Identifier(ident) => ident.pos,
            Expression::IntegerLiteral(lit) | Expression::StringLiteral(lit) => lit.pos,
            Expression::Call(call) => call.callee.pos,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallExpression<'src> {
    pub callee: Identifier<'src>,
    pub arguments: Seq<Expression<'src>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement<'src> {
    /// Placeholder for skipped input; never stored in a tree.
    Empty,
    Define(Box<DefineStatement<'src>>),
    Expression(Expression<'src>),
    Block(Block<'src>),
}

impl<'src> Statement<'src> {
    pub fn define(left: Seq<Identifier<'src>>, right: Seq<Expression<'src>>) -> Self {
        Statement::Define(Box::new(DefineStatement { left, right }))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Statement::Empty)
    }
}

/// `a, b := x, y`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefineStatement<'src> {
    pub left: Seq<Identifier<'src>>,
    pub right: Seq<Expression<'src>>,
}

/// `{ ... }`, positioned at the opening bracket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block<'src> {
    pub statements: Seq<Statement<'src>>,
    pub pos: Position,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeSpecifier<'src> {
    Name(TypeName<'src>),
    Literal(Box<TypeLiteral<'src>>),
}

impl<'src> TypeSpecifier<'src> {
    /// Unqualified type name.
    pub fn name(name: Identifier<'src>) -> Self {
        TypeSpecifier::Name(TypeName { name, module: None })
    }

    /// `[]elem`
    pub fn slice(elem: TypeSpecifier<'src>) -> Self {
        TypeSpecifier::Literal(Box::new(TypeLiteral::Slice { elem }))
    }
}

/// `name` or `module.name`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TypeName<'src> {
    pub name: Identifier<'src>,
    pub module: Option<Identifier<'src>>,
}

/// Composite type forms. The parser currently builds only `Slice`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeLiteral<'src> {
    Array {
        len: Expression<'src>,
        elem: TypeSpecifier<'src>,
    },
    Slice {
        elem: TypeSpecifier<'src>,
    },
    Map {
        key: TypeSpecifier<'src>,
        value: TypeSpecifier<'src>,
    },
    Set {
        elem: TypeSpecifier<'src>,
    },
    Pointer {
        elem: TypeSpecifier<'src>,
    },
    Channel {
        elem: TypeSpecifier<'src>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FunctionResult<'src> {
    Void,
    Simple(TypeSpecifier<'src>),
    /// `=> (int, string)`
    TupleSignature(Seq<TypeSpecifier<'src>>),
    /// `=> (a, b: int, c: string)`
    TypedTuple(Seq<ParameterDeclaration<'src>>),
}

/// One type shared by one or more names: `a, b: int`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterDeclaration<'src> {
    pub names: Seq<Identifier<'src>>,
    pub type_specifier: TypeSpecifier<'src>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDeclaration<'src> {
    pub name: Identifier<'src>,
    pub parameters: Seq<ParameterDeclaration<'src>>,
    pub result: FunctionResult<'src>,
}

/// A function declaration and its body. `body` is `None` for a bare
/// declaration such as `fn f() => int`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDefinition<'src> {
    pub declaration: FunctionDeclaration<'src>,
    pub body: Option<Block<'src>>,
}

/// Everything parsed from one source buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceTree<'src> {
    pub functions: Seq<FunctionDefinition<'src>>,
    pub statements: Seq<Statement<'src>>,
}
