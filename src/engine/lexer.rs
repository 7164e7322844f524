use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
///
/// The lexer deliberately recognizes more than the grammar accepts. Names,
/// strings, comparison and bitwise operators, separators and comments all
/// become tokens so the parser can reject them with a precise reason instead
/// of a generic "unknown character".
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5`, `2.` or `2.1e-10`.
    ///
    /// The literal is kept as written; the parser converts it to `f64`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", |lex| lex.slice().to_owned())]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().to_owned())]
    Number(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `**`
    #[token("**")]
    StarStar,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Identifier tokens; names such as `x`, `open` or `__import__`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_owned())]
    Identifier(String),
    /// String literals in single or double quotes.
    #[regex(r#"'[^'\n]*'|"[^"\n]*""#, |lex| lex.slice().to_owned())]
    Str(String),
    /// `==`, `!=`, `<`, `>`, `<=`, `>=`
    #[regex(r"==|!=|<=|>=|<|>", |lex| lex.slice().to_owned())]
    Comparison(String),
    /// Operators outside the arithmetic whitelist: `//`, `%`, `^`, `&`, `|`,
    /// `~`, `<<`, `>>`, `@`, `!`.
    #[regex(r"//|%|\^|&|\||~|<<|>>|@|!", |lex| lex.slice().to_owned())]
    Operator(String),
    /// `=` and `:=`
    #[regex(r"=|:=", |lex| lex.slice().to_owned())]
    Assign(String),
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `.` used for attribute access.
    #[token(".")]
    Dot,
    /// `:`
    #[token(":")]
    Colon,
    /// `[`, `]`, `{`, `}`
    #[regex(r"[\[\]{}]", |lex| lex.slice().to_owned())]
    Bracket(String),
    /// `# comments`
    #[regex(r"#[^\n\r]*", |lex| lex.slice().to_owned())]
    Comment(String),
}

impl Token {
    /// Names the construct a token introduces when that construct is outside
    /// the arithmetic grammar.
    ///
    /// Returns `None` for tokens the grammar accepts.
    ///
    /// # Example
    /// ```
    /// use roastulator::engine::lexer::Token;
    ///
    /// assert_eq!(Token::Identifier("x".into()).disallowed_construct(), Some("Names"));
    /// assert_eq!(Token::Semicolon.disallowed_construct(), Some("Statement separators"));
    /// assert_eq!(Token::Plus.disallowed_construct(), None);
    /// ```
    #[must_use]
    pub const fn disallowed_construct(&self) -> Option<&'static str> {
        match self {
            Self::Identifier(_) => Some("Names"),
            Self::Str(_) => Some("String literals"),
            Self::Comparison(_) => Some("Comparisons"),
            Self::Operator(_) => Some("Non-arithmetic operators"),
            Self::Assign(_) => Some("Assignments"),
            Self::Semicolon => Some("Statement separators"),
            Self::Comma => Some("Sequences"),
            Self::Dot | Self::Colon => Some("Attribute access"),
            Self::Bracket(_) => Some("Collections and subscripts"),
            Self::Comment(_) => Some("Comments"),
            Self::Number(_)
            | Self::Plus
            | Self::Minus
            | Self::Star
            | Self::Slash
            | Self::StarStar
            | Self::LParen
            | Self::RParen => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::StarStar => write!(f, "**"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Semicolon => write!(f, ";"),
            Self::Comma => write!(f, ","),
            Self::Dot => write!(f, "."),
            Self::Colon => write!(f, ":"),
            Self::Number(s)
            | Self::Identifier(s)
            | Self::Str(s)
            | Self::Comparison(s)
            | Self::Operator(s)
            | Self::Assign(s)
            | Self::Bracket(s)
            | Self::Comment(s) => write!(f, "{s}"),
        }
    }
}

/// Splits `source` into tokens paired with their character position.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for any character no token matches,
/// such as `$` or a non-ASCII symbol.
///
/// # Example
/// ```
/// use roastulator::engine::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 ** 3").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number("2".into()), 0),
///                 (Token::StarStar, 2),
///                 (Token::Number("3".into()), 5)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = char_position(source, lexer.span().start);
        if let Ok(tok) = token {
            tokens.push((tok, position));
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     position });
        }
    }

    Ok(tokens)
}

/// Converts a byte offset into a character offset.
fn char_position(source: &str, byte_offset: usize) -> usize {
    source.get(..byte_offset)
          .map_or(byte_offset, |prefix| prefix.chars().count())
}
