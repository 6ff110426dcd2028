use crate::{
    arena::{Arena, Store},
    parser::{ExprTree, Node, NodeId, NodeKind, ParseError, ParseErrorKind},
    syntax::Span,
    tokenizer::{Token, TokenKind},
};

/// Nesting limit used by [`parse`].
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Parse a token sequence holding exactly one parenthesized group.
pub fn parse<'a>(arena: &'a Arena, tokens: &[Token<'a>]) -> Result<ExprTree<'a>, ParseError> {
    parse_with_max_depth(arena, tokens, DEFAULT_MAX_DEPTH)
}

/// Parse with a custom nesting limit.
///
/// The outermost group is depth 1. Parsing recurses once per level, so
/// `max_depth` bounds stack use on untrusted input.
///
/// ## Example
///
/// ```
/// use sche_core::{arena::Arena, parser::{parse_with_max_depth, ParseErrorKind}, tokenizer::tokenize};
///
/// let arena = Arena::new();
/// let tokens = tokenize(&arena, "(+ 1 (* 2 3))").unwrap();
/// assert_eq!(parse_with_max_depth(&arena, &tokens, 2).unwrap().to_string(), "(+ 1 (* 2 3))");
///
/// let err = parse_with_max_depth(&arena, &tokens, 1).unwrap_err();
/// assert_eq!(err.kind, ParseErrorKind::MaxDepthExceeded { depth: 2, max_depth: 1 });
/// ```
pub fn parse_with_max_depth<'a>(
    arena: &'a Arena,
    tokens: &[Token<'a>],
    max_depth: usize,
) -> Result<ExprTree<'a>, ParseError> {
    check_balanced(tokens)?;

    let mut parser = Parser {
        nodes: Store::new_in(arena),
        max_depth,
    };
    let root = parser.group(tokens, 1)?;
    tracing::debug!(
        tokens = tokens.len(),
        nodes = parser.nodes.len(),
        "parsed expression"
    );
    Ok(ExprTree {
        nodes: parser.nodes,
        root,
    })
}

/// Checks that `tokens` is one group whose parentheses all match.
fn check_balanced(tokens: &[Token<'_>]) -> Result<(), ParseError> {
    let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
        return Err(ParseError::new(
            ParseErrorKind::TooShortExpression,
            Span::default(),
        ));
    };
    if first.kind != TokenKind::ParenOpen {
        return Err(unbalanced(first));
    }
    if last.kind != TokenKind::ParenClose {
        return Err(unbalanced(last));
    }
    if tokens.len() < 3 {
        return Err(ParseError::new(
            ParseErrorKind::TooShortExpression,
            group_span(tokens),
        ));
    }

    // Depth only returns to 0 at the last token, so it never goes negative.
    let mut depth = 0usize;
    // Children of the root follow one another; only the latest can be open.
    let mut last_child = 0;
    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::ParenOpen => {
                if depth == 1 {
                    last_child = i;
                }
                depth += 1;
            }
            TokenKind::ParenClose => {
                depth -= 1;
                if depth == 0 && i != tokens.len() - 1 {
                    return Err(unbalanced(token));
                }
            }
            TokenKind::Number(_) | TokenKind::Symbol(_) => {}
        }
    }
    match depth {
        0 => Ok(()),
        1 => Err(unbalanced(first)),
        _ => Err(unbalanced(&tokens[last_child])),
    }
}

fn unbalanced(token: &Token<'_>) -> ParseError {
    ParseError::new(ParseErrorKind::UnbalancedParens, token.span.clone())
}

/// Span from the first token's start to the last token's end.
fn group_span(group: &[Token<'_>]) -> Span {
    match (group.first(), group.last()) {
        (Some(first), Some(last)) => Span::combine(&first.span, &last.span),
        _ => Span::default(),
    }
}

/// Number of tokens up to and including the `)` matching `tokens[0]`.
fn matching_group_len(tokens: &[Token<'_>]) -> usize {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::ParenOpen => depth += 1,
            TokenKind::ParenClose => {
                depth -= 1;
                if depth == 0 {
                    return i + 1;
                }
            }
            TokenKind::Number(_) | TokenKind::Symbol(_) => {}
        }
    }
    unreachable!("parentheses are checked before parsing")
}

struct Parser<'a> {
    nodes: Store<'a, Node<'a>>,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Parses one group, parentheses included, and returns its head.
    fn group(&mut self, group: &[Token<'a>], depth: usize) -> Result<NodeId<'a>, ParseError> {
        let span = group_span(group);
        if depth > self.max_depth {
            return Err(ParseError::new(
                ParseErrorKind::MaxDepthExceeded {
                    depth,
                    max_depth: self.max_depth,
                },
                span,
            ));
        }
        if group.len() < 3 {
            return Err(ParseError::new(ParseErrorKind::TooShortExpression, span));
        }

        let mut rest = &group[1..group.len() - 1];
        let mut head = None;
        let mut prev: Option<NodeId<'a>> = None;

        while let Some(token) = rest.first() {
            let (kind, span, consumed) = match token.kind {
                TokenKind::Number(value) => (NodeKind::Integer(value), token.span.clone(), 1),
                TokenKind::Symbol(name) => (NodeKind::Name(name), token.span.clone(), 1),
                TokenKind::ParenOpen => {
                    let len = matching_group_len(rest);
                    let child = &rest[..len];
                    let child_head = self.group(child, depth + 1)?;
                    (NodeKind::SubExpression(child_head), group_span(child), len)
                }
                TokenKind::ParenClose => unreachable!("parentheses are checked before parsing"),
            };

            let id = self
                .nodes
                .push(Node {
                    kind,
                    span: span.clone(),
                    next: None,
                })
                .map_err(|e| ParseError::new(e.into(), span))?;
            match prev {
                Some(prev) => self.nodes.get_mut(prev).next = Some(id),
                None => head = Some(id),
            }
            prev = Some(id);
            rest = &rest[consumed..];
        }

        tracing::trace!(depth, "parsed group");
        head.ok_or_else(|| ParseError::new(ParseErrorKind::TooShortExpression, span))
    }
}
