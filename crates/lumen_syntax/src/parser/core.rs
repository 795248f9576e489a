// Parser core type and entrypoint.
//
// This chunk defines the `Parser` type and its top-level `parse_program()` loop. It is
// `include!`'d into `crate::parser` to keep all parser methods in a single module.

/// Parser state: a cursor over the token sequence plus the symbol table for this parse.
///
/// ## Notes
/// - A parser is built for one parse and then dropped. Nothing carries over between parses, so
///   parsing the same tokens twice always gives the same result.
/// - The cursor only moves forward. There is no backtracking and no error recovery.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    symbols: SymbolTable,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token sequence.
    ///
    /// ## Parameters
    /// - `tokens`: Token sequence produced by `lumen_syntax::lexer::tokenize`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            symbols: SymbolTable::new(),
        }
    }

    /// Parse the whole token sequence as a program.
    ///
    /// ## Errors
    /// Returns the first [`ParseError`] encountered; parsing stops there.
    pub fn parse_program(&mut self) -> Result<(), ParseError> {
        while !self.is_at_end() {
            self.statement()?;
        }
        Ok(())
    }

    /// Names declared so far.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Index of the next unconsumed token.
    pub fn position(&self) -> usize {
        self.pos
    }
}
