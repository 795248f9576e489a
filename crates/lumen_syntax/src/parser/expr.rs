/// Expression parsing methods.
///
/// Two precedence levels taken from the operator registry: additive (`+`, `-`, level 1) and
/// multiplicative (`*`, `/`, level 2). Both are left-associative loops.
///
/// ## Notes
/// - Operator runs with no registry spelling (e.g. `+-`) never match a level and end the
///   expression; the enclosing rule then reports whatever comes next.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    const ADDITIVE: u8 = 1;
    const MULTIPLICATIVE: u8 = 2;

    fn expression(&mut self) -> Result<(), ParseError> {
        self.term()?;
        while self.binary_operator(Self::ADDITIVE).is_some() {
            self.advance();
            self.term()?;
        }
        Ok(())
    }

    fn term(&mut self) -> Result<(), ParseError> {
        self.factor()?;
        while self.binary_operator(Self::MULTIPLICATIVE).is_some() {
            self.advance();
            self.factor()?;
        }
        Ok(())
    }

    fn factor(&mut self) -> Result<(), ParseError> {
        let Some(token) = self.peek() else {
            return Err(ParseError::unexpected_eof("expression"));
        };
        if !token.starts_factor() {
            return Err(ParseError::invalid_expression(token));
        }
        if token.is_bracket(BracketId::LParen) {
            self.consume_bracket(BracketId::LParen)?;
            self.expression()?;
            self.consume_bracket(BracketId::RParen)?;
        } else {
            self.advance();
        }
        Ok(())
    }

    /// Return the current operator if it binds at `level`.
    fn binary_operator(&self, level: u8) -> Option<OperatorId> {
        self.peek()
            .and_then(Token::operator_id)
            .filter(|&id| operators::precedence(id) == Some(level))
    }
}
