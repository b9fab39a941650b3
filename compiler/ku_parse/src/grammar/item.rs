//! Function definitions.
//!
//! ```text
//! FunctionDefinition  = FunctionDeclaration [ Block ] .
//! FunctionDeclaration = "fn" identifier Parameters [ "=>" Result ] .
//! Parameters          = "(" [ Declaration { "," Declaration } [ "," ] ] ")" .
//! Declaration         = identifier { "," identifier } ":" Type .
//! Result              = Type | "(" TypeList ")" | "(" Declaration { "," Declaration } [ "," ] ")" .
//! ```

use ku_ir::{
    FunctionDeclaration, FunctionDefinition, FunctionResult, Identifier, ParameterDeclaration,
    Seq, Token, TokenKind, TypeSpecifier,
};
use tracing::debug;

use crate::{ErrorContext, ParseError, Parser};

impl<'src> Parser<'src, '_> {
    pub(crate) fn parse_function_definition(
        &mut self,
    ) -> Result<FunctionDefinition<'src>, ParseError> {
        let declaration = self.parse_function_declaration()?;
        debug!(name = %declaration.name.as_str(), pos = %declaration.name.pos, "function definition");
        // A declaration may stand alone when nothing but a separator, the
        // next function, or the end of input follows it.
        let body = match self.cursor.current_kind() {
            TokenKind::Eof | TokenKind::Function => None,
            TokenKind::Terminator | TokenKind::Semicolon => {
                self.cursor.advance();
                None
            }
            _ => {
                let block = self.parse_block()?;
                self.cursor.eat(TokenKind::Terminator);
                Some(block)
            }
        };
        Ok(FunctionDefinition { declaration, body })
    }

    pub(crate) fn parse_function_declaration(
        &mut self,
    ) -> Result<FunctionDeclaration<'src>, ParseError> {
        self.in_error_context(ErrorContext::FunctionDeclaration, |p| {
            p.cursor.expect(TokenKind::Function)?;
            let name = p.cursor.expect_ident()?;
            let parameters = p.parse_function_parameters()?;
            let result = p.parse_function_result()?;
            Ok(FunctionDeclaration {
                name,
                parameters,
                result,
            })
        })
    }

    fn parse_function_parameters(
        &mut self,
    ) -> Result<Seq<ParameterDeclaration<'src>>, ParseError> {
        self.in_error_context(ErrorContext::FunctionParameters, |p| {
            let open = p.cursor.expect(TokenKind::LeftRoundBracket)?;
            let mut parameters = Seq::new_empty();

            while !p.cursor.check(TokenKind::RightRoundBracket) {
                parameters.append(p.parse_parameter_declaration()?);
                if !p.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }

            p.cursor.expect_closing(TokenKind::RightRoundBracket, &open)?;
            Ok(parameters)
        })
    }

    /// `a, b: int`
    fn parse_parameter_declaration(
        &mut self,
    ) -> Result<ParameterDeclaration<'src>, ParseError> {
        let mut names = Seq::new_empty();
        names.append(self.cursor.expect_ident()?);
        while self.cursor.eat(TokenKind::Comma) {
            names.append(self.cursor.expect_ident()?);
        }
        self.finish_parameter_declaration(names)
    }

    fn finish_parameter_declaration(
        &mut self,
        names: Seq<Identifier<'src>>,
    ) -> Result<ParameterDeclaration<'src>, ParseError> {
        self.cursor.expect(TokenKind::Colon)?;
        let type_specifier = self.parse_type_specifier()?;
        Ok(ParameterDeclaration {
            names,
            type_specifier,
        })
    }

    /// The part after the parameters.
    ///
    /// Inside `=> (` a leading run of bare identifiers is ambiguous until
    /// the token after it: `)` makes them type names, `:` makes them result
    /// names sharing the following type, and anything else makes them the
    /// first types of a longer type list.
    fn parse_function_result(&mut self) -> Result<FunctionResult<'src>, ParseError> {
        if !self.cursor.eat(TokenKind::RightArrow) {
            return Ok(FunctionResult::Void);
        }

        let result = self.in_error_context(ErrorContext::FunctionResult, |p| {
            if !p.cursor.check(TokenKind::LeftRoundBracket) {
                return Ok(FunctionResult::Simple(p.parse_type_specifier()?));
            }
            let open = p.cursor.advance();

            let mut names = Seq::new_empty();
            while p.cursor.check_ident() {
                names.append(Identifier::from_token(&p.cursor.advance()));
                // Leave a `,` that is not followed by a name for the type list.
                if p.cursor.check(TokenKind::Comma)
                    && p.cursor.peek_kind(1) == TokenKind::Identifier
                {
                    p.cursor.advance();
                } else {
                    break;
                }
            }

            Ok(match p.cursor.current_kind() {
                TokenKind::RightRoundBracket if !names.is_empty() => {
                    p.cursor.advance();
                    FunctionResult::TupleSignature(names.into_iter().map(TypeSpecifier::name).collect())
                }
                TokenKind::Colon if !names.is_empty() => {
                    FunctionResult::TypedTuple(p.parse_typed_tuple(names, &open)?)
                }
                _ => FunctionResult::TupleSignature(p.parse_tuple_signature(names, &open)?),
            })
        })?;

        debug!(shape = result_shape(&result), "function result");
        Ok(result)
    }

    /// Rest of `=> (a, b: int, c: string)` once the first `:` is current.
    fn parse_typed_tuple(
        &mut self,
        names: Seq<Identifier<'src>>,
        open: &Token<'src>,
    ) -> Result<Seq<ParameterDeclaration<'src>>, ParseError> {
        let mut declarations = Seq::new_empty();
        declarations.append(self.finish_parameter_declaration(names)?);

        while self.cursor.eat(TokenKind::Comma) {
            if self.cursor.check(TokenKind::RightRoundBracket) {
                break;
            }
            declarations.append(self.parse_parameter_declaration()?);
        }

        self.cursor
            .expect_closing(TokenKind::RightRoundBracket, open)?;
        Ok(declarations)
    }

    /// Rest of `=> (int, []string)` after the leading type names.
    fn parse_tuple_signature(
        &mut self,
        leading: Seq<Identifier<'src>>,
        open: &Token<'src>,
    ) -> Result<Seq<TypeSpecifier<'src>>, ParseError> {
        let has_leading = !leading.is_empty();
        let mut types: Seq<TypeSpecifier<'src>> =
            leading.into_iter().map(TypeSpecifier::name).collect();

        if has_leading && !self.cursor.check(TokenKind::RightRoundBracket) {
            self.cursor.expect(TokenKind::Comma)?;
        }

        while !self.cursor.check(TokenKind::RightRoundBracket) {
            types.append(self.parse_type_specifier()?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }

        self.cursor
            .expect_closing(TokenKind::RightRoundBracket, open)?;
        Ok(types)
    }
}

fn result_shape(result: &FunctionResult<'_>) -> &'static str {
    match result {
        FunctionResult::Void => "void",
        FunctionResult::Simple(_) => "simple",
        FunctionResult::TupleSignature(_) => "tuple signature",
        FunctionResult::TypedTuple(_) => "typed tuple",
    }
}
