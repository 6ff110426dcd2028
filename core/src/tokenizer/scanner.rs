use crate::{
    ToString,
    arena::Arena,
    syntax::{Location, Span},
    tokenizer::{Token, TokenKind, TokenizeError, TokenizeErrorKind, TokenizerOptions, Tokens},
};

/// Tokenize `source` with default options.
pub fn tokenize<'a>(arena: &'a Arena, source: &str) -> Result<Tokens<'a>, TokenizeError> {
    tokenize_with_options(arena, source, &TokenizerOptions::default())
}

/// Tokenize `source`, storing tokens and symbol text in `arena`.
///
/// ## Example
///
/// ```
/// use sche_core::{arena::Arena, tokenizer::{tokenize, TokenKind}};
///
/// let arena = Arena::new();
/// let tokens = tokenize(&arena, "(+ -1 20)").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::ParenOpen,
///         TokenKind::Symbol("+"),
///         TokenKind::Number(-1),
///         TokenKind::Number(20),
///         TokenKind::ParenClose,
///     ]
/// );
/// ```
pub fn tokenize_with_options<'a>(
    arena: &'a Arena,
    source: &str,
    options: &TokenizerOptions,
) -> Result<Tokens<'a>, TokenizeError> {
    let tokens = Scanner::new(arena, source, options).run()?;
    tracing::debug!(tokens = tokens.len(), bytes = source.len(), "tokenized input");
    Ok(tokens)
}

/// Character that ends a number or a symbol (`None` is end of input).
fn is_delimiter(c: Option<char>) -> bool {
    match c {
        None | Some('(' | ')') => true,
        Some(c) => c.is_whitespace(),
    }
}

struct Scanner<'a, 's> {
    arena: &'a Arena,
    source: &'s str,
    options: &'s TokenizerOptions,
    tokens: Tokens<'a>,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a, 's> Scanner<'a, 's> {
    fn new(arena: &'a Arena, source: &'s str, options: &'s TokenizerOptions) -> Self {
        Self {
            arena,
            source,
            options,
            tokens: Tokens::new_in(arena),
            pos: 0,
            line: 0,
            column: 0,
        }
    }

    fn run(mut self) -> Result<Tokens<'a>, TokenizeError> {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.bump();
                continue;
            }

            let start = self.pos;
            let location = self.location();
            if let Some(max_tokens) = self.options.max_tokens {
                if self.tokens.len() >= max_tokens {
                    return Err(TokenizeError::new(
                        TokenizeErrorKind::TooManyTokens { max_tokens },
                        location,
                        Span::new(start, start + c.len_utf8()),
                    ));
                }
            }

            let kind = match c {
                '(' => {
                    self.bump();
                    TokenKind::ParenOpen
                }
                ')' => {
                    self.bump();
                    TokenKind::ParenClose
                }
                '-' if self.peek_second().is_some_and(|c| c.is_ascii_digit()) => self.number()?,
                c if c.is_ascii_digit() => self.number()?,
                _ => self.symbol()?,
            };

            let span = Span::new(start, self.pos);
            self.tokens
                .push(Token::new(kind, span.clone()))
                .map_err(|e| TokenizeError::new(e.into(), location, span))?;
        }
        Ok(self.tokens)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.source[self.pos..].chars().nth(1)
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }

    fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    /// Optional `-`, optional radix prefix, then a maximal digit run.
    fn number(&mut self) -> Result<TokenKind<'a>, TokenizeError> {
        let start = self.pos;
        let start_location = self.location();

        let negative = self.peek() == Some('-');
        if negative {
            self.bump();
        }

        let radix = self.radix_prefix();
        let digits_start = self.pos;
        while self.peek().is_some_and(|c| c.is_digit(radix)) {
            self.bump();
        }

        let next = self.peek();
        if !is_delimiter(next) {
            let end = self.pos + next.map_or(0, char::len_utf8);
            return Err(TokenizeError::new(
                TokenizeErrorKind::InvalidName,
                self.location(),
                Span::new(self.pos, end),
            ));
        }

        let digits = &self.source[digits_start..self.pos];
        match parse_integer(digits, radix, negative) {
            Some(value) => Ok(TokenKind::Number(value)),
            None => Err(TokenizeError::new(
                TokenizeErrorKind::NumberOutOfRange {
                    text: self.source[start..self.pos].to_string(),
                },
                start_location,
                Span::new(start, self.pos),
            )),
        }
    }

    /// Consumes a `0x` prefix and returns the radix of the digits that follow.
    ///
    /// Mirrors `strtol` with base 0: `0x` only counts when a hex digit follows,
    /// and a leading `0` followed by another digit selects octal (the `0`
    /// itself stays part of the digit run).
    fn radix_prefix(&mut self) -> u32 {
        if !self.options.radix_prefixes {
            return 10;
        }
        let mut chars = self.source[self.pos..].chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some('0'), Some('x' | 'X'), Some(c)) if c.is_ascii_hexdigit() => {
                self.bump();
                self.bump();
                16
            }
            (Some('0'), Some(c), _) if c.is_ascii_digit() => 8,
            _ => 10,
        }
    }

    fn symbol(&mut self) -> Result<TokenKind<'a>, TokenizeError> {
        let start = self.pos;
        let location = self.location();
        while !is_delimiter(self.peek()) {
            self.bump();
        }
        let text = self
            .arena
            .alloc_str(&self.source[start..self.pos])
            .map_err(|e| TokenizeError::new(e.into(), location, Span::new(start, self.pos)))?;
        Ok(TokenKind::Symbol(text))
    }
}

fn parse_integer(digits: &str, radix: u32, negative: bool) -> Option<i64> {
    let magnitude = i128::from(u64::from_str_radix(digits, radix).ok()?);
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}
