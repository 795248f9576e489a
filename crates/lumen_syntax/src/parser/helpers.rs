/// Token-sequence helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking (`peek`, `check_*`)
/// - Consuming with expectations (`consume`, `consume_*`)
/// - The raw `advance` used by `factor` for literal/identifier leaves
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` once every token has been consumed.
    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Step past the current token without checking it.
    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().is_some_and(|t| t.is_keyword(id))
    }

    fn check_bracket(&self, id: BracketId) -> bool {
        self.peek().is_some_and(|t| t.is_bracket(id))
    }

    fn check_operator(&self, id: OperatorId) -> bool {
        self.peek().is_some_and(|t| t.is_operator(id))
    }

    /// Consume the current token if it has `category` (and `text`, when given).
    ///
    /// ## Errors
    /// - End of input: an `UnexpectedEof` error naming what was expected.
    /// - Mismatch: an `ExpectedToken` error anchored to the current token.
    fn consume(&mut self, category: TokenCategory, text: Option<&'static str>) -> Result<&'a Token, ParseError> {
        let expected = Expectation::new(category, text);
        let Some(token) = self.peek() else {
            return Err(ParseError::unexpected_eof(expected));
        };
        if token.category != category || text.is_some_and(|text| token.text != text) {
            return Err(ParseError::expected(expected, token));
        }
        self.pos += 1;
        Ok(token)
    }

    fn consume_keyword(&mut self, id: KeywordId) -> Result<&'a Token, ParseError> {
        self.consume(TokenCategory::Keyword, Some(keywords::as_str(id)))
    }

    fn consume_bracket(&mut self, id: BracketId) -> Result<&'a Token, ParseError> {
        self.consume(TokenCategory::Bracket, Some(brackets::as_str(id)))
    }

    fn consume_operator(&mut self, id: OperatorId) -> Result<&'a Token, ParseError> {
        self.consume(TokenCategory::Operator, Some(operators::as_str(id)))
    }

    fn consume_identifier(&mut self) -> Result<&'a Token, ParseError> {
        self.consume(TokenCategory::Identifier, None)
    }

    /// Consume a trailing `;` if one is present. Its absence is never an error.
    fn optional_semicolon(&mut self) -> Result<(), ParseError> {
        if self.check_operator(OperatorId::Semicolon) {
            self.consume_operator(OperatorId::Semicolon)?;
        }
        Ok(())
    }
}
