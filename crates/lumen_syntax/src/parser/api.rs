/// Parse a token sequence as a Lumen program.
///
/// This is the main public entrypoint for parsing. Every call builds a fresh [`Parser`] with an
/// empty symbol table.
///
/// ## Parameters
/// - `tokens`: Token sequence produced by `lumen_syntax::lexer::tokenize`.
///
/// ## Errors
/// Returns the first [`ParseError`]; there is no recovery.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<(), ParseError> {
    let mut parser = Parser::new(tokens);
    let result = parser.parse_program();
    match &result {
        Ok(()) => tracing::debug!(symbols = parser.symbols().len(), "parse accepted"),
        Err(err) => tracing::debug!(kind = %err.kind, pos = parser.position(), "parse rejected: {}", err.message),
    }
    result
}
