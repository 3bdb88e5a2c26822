use std::fmt;

use logos::Logos;

use crate::error::lex_error::LexErrorKind;

/// A token together with the 1-based source line it starts on.
pub type Spanned = (Token, usize);

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5` or `42`. Any run of digits
    /// and dots is taken greedily; runs that are not a float are rejected.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// String literal tokens. The quotes are dropped and no escapes are
    /// processed.
    #[regex(r#""[^"]*""#, parse_string)]
    Str(String),
    /// A string literal whose closing quote is not in the scanned text yet.
    /// The scanner either extends it with more input or closes it at end of
    /// input; it is never handed to the parser.
    #[regex(r#""[^"]*"#, parse_open_string)]
    OpenStr(String),
    /// `цел`
    #[token("цел")]
    IntDecl,
    /// `вещ`
    #[token("вещ")]
    DoubleDecl,
    /// `бул`
    #[token("бул")]
    BoolDecl,
    /// `если`
    #[token("если")]
    If,
    /// `иначе`
    #[token("иначе")]
    Else,
    /// `нц_пока`
    #[token("нц_пока")]
    While,
    /// `вывод`
    #[token("вывод")]
    Print,
    /// `конецстр`
    #[token("конецстр")]
    Newline,
    /// `ввод`
    #[token("ввод")]
    Input,
    /// Identifier tokens; variable and array names such as `x` or `счётчик`.
    #[regex(r"[a-zA-Zа-яА-ЯёЁ][a-zA-Z0-9а-яА-ЯёЁ_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.`
    #[regex(r"#[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
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
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// Marks the end of the source. Never produced by logos; the scanner
    /// yields it once, with the last line of the source, after the final
    /// token.
    EndOfInput,
    /// Spaces, tabs and line breaks.
    #[regex(r"\s+", |lex| {
        lex.extras.line += lex.slice().matches('\n').count();
        logos::Skip
    })]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// The scanner seeds it with the line its buffered text starts on.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Bool(b) => write!(f, "'{b}'"),
            Self::Str(s) | Self::OpenStr(s) => write!(f, "string \"{s}\""),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::IntDecl => f.write_str("'цел'"),
            Self::DoubleDecl => f.write_str("'вещ'"),
            Self::BoolDecl => f.write_str("'бул'"),
            Self::If => f.write_str("'если'"),
            Self::Else => f.write_str("'иначе'"),
            Self::While => f.write_str("'нц_пока'"),
            Self::Print => f.write_str("'вывод'"),
            Self::Newline => f.write_str("'конецстр'"),
            Self::Input => f.write_str("'ввод'"),
            Self::Plus => f.write_str("'+'"),
            Self::Minus => f.write_str("'-'"),
            Self::Star => f.write_str("'*'"),
            Self::Slash => f.write_str("'/'"),
            Self::LParen => f.write_str("'('"),
            Self::RParen => f.write_str("')'"),
            Self::LBrace => f.write_str("'{'"),
            Self::RBrace => f.write_str("'}'"),
            Self::LBracket => f.write_str("'['"),
            Self::RBracket => f.write_str("']'"),
            Self::Comma => f.write_str("','"),
            Self::Semicolon => f.write_str("';'"),
            Self::Assign => f.write_str("'='"),
            Self::EqualEqual => f.write_str("'=='"),
            Self::BangEqual => f.write_str("'!='"),
            Self::Less => f.write_str("'<'"),
            Self::LessEqual => f.write_str("'<='"),
            Self::Greater => f.write_str("'>'"),
            Self::GreaterEqual => f.write_str("'>='"),
            Self::AndAnd => f.write_str("'&&'"),
            Self::OrOr => f.write_str("'||'"),
            Self::EndOfInput => f.write_str("end of input"),
            Self::Comment => f.write_str("comment"),
            Self::Ignored => f.write_str("whitespace"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(LexErrorKind::MalformedNumber)`: If the run of digits and dots is
///   not a float, such as `.` or `1.2.3`.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    lex.slice()
       .parse()
       .map_err(|_| LexErrorKind::MalformedNumber)
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Strips the quotes from a closed string literal, counting the line breaks
/// it spans.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.matches('\n').count();
    slice[1..slice.len() - 1].to_string()
}

/// Strips the opening quote from a string literal that runs to the end of the
/// scanned text.
fn parse_open_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.matches('\n').count();
    slice[1..].to_string()
}
