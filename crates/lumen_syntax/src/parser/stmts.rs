/// Statement parsing methods.
///
/// This chunk dispatches statements on their leading token and parses `if`/`else`, `return`,
/// assignments and braced blocks.
///
/// ## Notes
/// - A leading identifier always starts an assignment, so `y (1)` reports `y` as undeclared and
///   `x 1` reports the missing `=`. The one exception is an identifier that is the final token,
///   which is an unexpected token.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<(), ParseError> {
        let Some(token) = self.peek() else {
            return Err(ParseError::unexpected_eof("statement"));
        };
        tracing::trace!(pos = self.pos, text = %token.text, "statement");

        match token.category {
            TokenCategory::Keyword => match token.keyword_id() {
                Some(KeywordId::Let) => self.declaration(),
                Some(KeywordId::If) => self.if_stmt(),
                Some(KeywordId::Return) => self.return_stmt(),
                _ => Err(ParseError::unknown_keyword(token)),
            },
            // A name with nothing after it cannot start an assignment.
            TokenCategory::Identifier if self.is_last_token() => Err(ParseError::unexpected_token(token)),
            TokenCategory::Identifier => self.assignment(),
            TokenCategory::Operator | TokenCategory::Literal | TokenCategory::Bracket => {
                Err(ParseError::unexpected_token(token))
            }
        }
    }

    fn is_last_token(&self) -> bool {
        self.pos + 1 == self.tokens.len()
    }

    /// Parse `open statement* close`, where `close` is the partner of `open`.
    fn block(&mut self, open: BracketId) -> Result<(), ParseError> {
        let close = brackets::partner(open);
        self.consume_bracket(open)?;
        while self.peek().is_some_and(|t| !t.is_bracket(close)) {
            self.statement()?;
        }
        self.consume_bracket(close)?;
        Ok(())
    }

    fn if_stmt(&mut self) -> Result<(), ParseError> {
        self.consume_keyword(KeywordId::If)?;
        self.consume_bracket(BracketId::LParen)?;
        self.expression()?;
        self.consume_bracket(BracketId::RParen)?;
        self.block(BracketId::LBrace)?;

        if self.check_keyword(KeywordId::Else) {
            self.consume_keyword(KeywordId::Else)?;
            self.block(BracketId::LBrace)?;
        }
        Ok(())
    }

    fn return_stmt(&mut self) -> Result<(), ParseError> {
        self.consume_keyword(KeywordId::Return)?;
        self.expression()?;
        self.optional_semicolon()
    }

    fn assignment(&mut self) -> Result<(), ParseError> {
        let name = self.consume_identifier()?;
        if !self.symbols.is_declared(&name.text) {
            return Err(ParseError::undeclared_variable(name));
        }
        self.consume_operator(OperatorId::Eq)?;
        self.expression()?;
        self.optional_semicolon()
    }
}
