use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::{
    grammars::{Grammar, Rule, RuleAction},
    tokens::{Token, TokenKind},
};

#[derive(Debug, Clone, Default)]
pub struct LexerOptions {
    /// Inputs longer than this many bytes are rejected before scanning.
    pub max_input_len: Option<usize>,
}

impl LexerOptions {
    pub fn with_max_input_len(mut self, limit: usize) -> Self {
        self.max_input_len = Some(limit);
        self
    }
}

pub struct Lexer<'a> {
    grammar: &'a Grammar,
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    line: usize,
    line_start: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, grammar: &'a Grammar) -> Lexer<'a> {
        Lexer {
            grammar,
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            line_start: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position::new(self.pos, self.line, self.pos - self.line_start)
    }

    /// Position just past a lexeme of `len` bytes starting at the cursor,
    /// counting any newlines inside it.
    fn end_of(&self, len: usize) -> Position {
        let end = self.pos + len;
        let lexeme = &self.source[self.pos..end];

        match lexeme.rfind('\n') {
            Some(last) => Position::new(end, self.line + lexeme.matches('\n').count(), len - last - 1),
            None => Position::new(end, self.line, end - self.line_start),
        }
    }

    fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: self.end_of(len),
        }
    }

    /// Moves past a lexeme, keeping the line count right when it spans lines.
    fn consume(&mut self, len: usize) {
        let end = self.end_of(len);
        self.line = end.line;
        self.line_start = end.offset - end.column;
        self.advance_n(len);
    }

    fn unrecognised(&self) -> Error {
        // Only reachable with input left, so there is a character to report.
        let character = self.at().unwrap_or('\0');
        Error::new(ErrorImpl::UnrecognisedToken { character }, self.position())
    }

    fn apply(&mut self, rule: &Rule, len: usize) -> Result<(), Error> {
        let matched = &self.remainder()[..len];
        tracing::trace!(rule = rule.name(), lexeme = matched, line = self.line, "matched");

        match rule.action() {
            RuleAction::Emit(kind) => default_handler(self, kind, len),
            RuleAction::Number(kind) => number_handler(self, kind, len)?,
            RuleAction::Identifier(kind) => symbol_handler(self, kind, len),
            RuleAction::Newline => newline_handler(self, len),
            RuleAction::Skip => skip_handler(self, len),
            RuleAction::Mismatch => return Err(self.unrecognised()),
        }

        Ok(())
    }
}

fn default_handler(lexer: &mut Lexer, kind: TokenKind, len: usize) {
    let matched = &lexer.remainder()[..len];
    lexer.push(MK_TOKEN!(kind, matched, lexer.span_of(len)));
    lexer.consume(len);
}

fn number_handler(lexer: &mut Lexer, kind: TokenKind, len: usize) -> Result<(), Error> {
    let matched = &lexer.remainder()[..len];
    let value = matched.parse::<f64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError { token: matched.to_string() },
            lexer.position(),
        )
    })?;

    lexer.push(MK_TOKEN!(kind, value, lexer.span_of(len)));
    lexer.advance_n(len);
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, kind: TokenKind, len: usize) {
    let value = &lexer.remainder()[..len];

    if let Some(reserved) = lexer.grammar.keyword(value) {
        lexer.push(MK_TOKEN!(reserved, value, lexer.span_of(len)));
    } else {
        lexer.push(MK_TOKEN!(kind, value, lexer.span_of(len)));
    }

    lexer.advance_n(len);
}

fn newline_handler(lexer: &mut Lexer, len: usize) {
    lexer.advance_n(len);
    lexer.line += 1;
    lexer.line_start = lexer.pos;
}

fn skip_handler(lexer: &mut Lexer, len: usize) {
    lexer.consume(len);
}

/// Scans `source` with `grammar`, returning every emitted token in source
/// order or the first lexical error.
pub fn tokenize(source: &str, grammar: &Grammar) -> Result<Vec<Token>, Error> {
    tokenize_with(source, grammar, &LexerOptions::default())
}

pub fn tokenize_with(source: &str, grammar: &Grammar, options: &LexerOptions) -> Result<Vec<Token>, Error> {
    if let Some(limit) = options.max_input_len {
        if source.len() > limit {
            return Err(Error::new(
                ErrorImpl::InputTooLarge { len: source.len(), limit },
                Position::null(),
            ));
        }
    }

    tracing::debug!(grammar = %grammar.name(), len = source.len(), "tokenizing");

    let mut lex = Lexer::new(source, grammar);

    while !lex.at_eof() {
        match grammar.first_match(lex.remainder()) {
            Some((rule, len)) => lex.apply(rule, len)?,
            None => return Err(lex.unrecognised()),
        }
    }

    tracing::debug!(grammar = %grammar.name(), tokens = lex.tokens.len(), lines = lex.line, "tokenized");
    Ok(lex.tokens)
}
