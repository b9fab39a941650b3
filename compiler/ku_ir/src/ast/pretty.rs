//! Human-readable rendering of the AST.
//!
//! Output is for inspection (`ku parse`) and is not meant to be parsed
//! back. Statements inside blocks are indented four spaces per level.

use std::fmt::{self, Display, Formatter, Write};

use super::{
    Block, Expression, FunctionDeclaration, FunctionDefinition, FunctionResult, Identifier,
    Literal, ParameterDeclaration, SourceTree, Statement, TypeLiteral, TypeName, TypeSpecifier,
};

const INDENT: &str = "    ";

fn write_bytes(f: &mut Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    f.write_str(&String::from_utf8_lossy(bytes))
}

fn write_joined<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Display for Identifier<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_bytes(f, self.name)
    }
}

impl Display for Literal<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_bytes(f, self.raw)
    }
}

impl Display for Expression<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{ident}"),
            Expression::IntegerLiteral(lit) | Expression::StringLiteral(lit) => write!(f, "{lit}"),
            Expression::Call(call) => {
                write!(f, "{}(", call.callee)?;
                write_joined(f, &call.arguments)?;
                f.write_char(')')
            }
        }
    }
}

impl Display for TypeName<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(module) = &self.module {
            write!(f, "{module}.")?;
        }
        write!(f, "{}", self.name)
    }
}

impl Display for TypeSpecifier<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TypeSpecifier::Name(name) => write!(f, "{name}"),
            TypeSpecifier::Literal(literal) => match literal.as_ref() {
                TypeLiteral::Array { len, elem } => write!(f, "[{len}]{elem}"),
                TypeLiteral::Slice { elem } => write!(f, "[]{elem}"),
                TypeLiteral::Map { key, value } => write!(f, "map[{key}]{value}"),
                TypeLiteral::Set { elem } => write!(f, "set[{elem}]"),
                TypeLiteral::Pointer { elem } => write!(f, "*{elem}"),
                TypeLiteral::Channel { elem } => write!(f, "chan {elem}"),
            },
        }
    }
}

impl Display for ParameterDeclaration<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.names)?;
        write!(f, ": {}", self.type_specifier)
    }
}

impl Display for FunctionResult<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FunctionResult::Void => Ok(()),
            FunctionResult::Simple(ty) => write!(f, " => {ty}"),
            FunctionResult::TupleSignature(types) => {
                f.write_str(" => (")?;
                write_joined(f, types)?;
                f.write_char(')')
            }
            FunctionResult::TypedTuple(params) => {
                f.write_str(" => (")?;
                write_joined(f, params)?;
                f.write_char(')')
            }
        }
    }
}

impl Display for FunctionDeclaration<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "fn {}(", self.name)?;
        write_joined(f, &self.parameters)?;
        write!(f, "){}", self.result)
    }
}

fn write_statement(f: &mut Formatter<'_>, stmt: &Statement<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    match stmt {
        Statement::Empty => f.write_char(';')?,
        Statement::Define(define) => {
            write_joined(f, &define.left)?;
            f.write_str(" := ")?;
            write_joined(f, &define.right)?;
        }
        Statement::Expression(expr) => write!(f, "{expr}")?,
        Statement::Block(block) => write_block(f, block, depth)?,
    }
    f.write_char('\n')
}

fn write_block(f: &mut Formatter<'_>, block: &Block<'_>, depth: usize) -> fmt::Result {
    f.write_str("{\n")?;
    for stmt in &block.statements {
        write_statement(f, stmt, depth + 1)?;
    }
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    f.write_char('}')
}

impl Display for Statement<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

impl Display for FunctionDefinition<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.declaration)?;
        if let Some(body) = &self.body {
            f.write_char(' ')?;
            write_block(f, body, 0)?;
        }
        f.write_char('\n')
    }
}

impl Display for SourceTree<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for function in &self.functions {
            write!(f, "{function}")?;
        }
        for stmt in &self.statements {
            write_statement(f, stmt, 0)?;
        }
        Ok(())
    }
}
