/// Declaration parsing methods.
///
/// `let variable NAME (= expression)?` and `let function NAME() { ... }`.
///
/// ## Notes
/// - A variable name is declared *before* its initializer is parsed, so `let variable x = x`
///   is accepted.
/// - Function names are not entered into the symbol table.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    fn declaration(&mut self) -> Result<(), ParseError> {
        self.consume_keyword(KeywordId::Let)?;

        let Some(next) = self.peek() else {
            return Err(ParseError::unexpected_eof("'variable' or 'function' after 'let'"));
        };
        match next.keyword_id() {
            Some(KeywordId::Variable) => self.variable_decl(),
            Some(KeywordId::Function) => self.function_decl(),
            _ => Err(ParseError::expected_declarator(next)),
        }
    }

    fn variable_decl(&mut self) -> Result<(), ParseError> {
        self.consume_keyword(KeywordId::Variable)?;
        let name = self.consume_identifier()?;
        self.symbols.declare(&name.text);

        if self.check_operator(OperatorId::Eq) {
            self.consume_operator(OperatorId::Eq)?;
            self.expression()?;
        }
        self.optional_semicolon()
    }

    fn function_decl(&mut self) -> Result<(), ParseError> {
        self.consume_keyword(KeywordId::Function)?;
        let name = self.consume_identifier()?;
        tracing::trace!(name = %name.text, "function declaration");
        self.consume_bracket(BracketId::LParen)?;
        self.consume_bracket(BracketId::RParen)?;

        if self.check_bracket(BracketId::LBrace) {
            self.block(BracketId::LBrace)?;
        }
        Ok(())
    }
}
