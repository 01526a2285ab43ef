//! Logos-based lexer for Magic Script
//!
//! Fast tokenization using the logos crate.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
///
/// Nothing is skipped; whitespace and comments come through as trivia so
/// the parser can preserve full source fidelity in the tree.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"[0-9]+[Ll]")]
    Long,

    #[regex(r"[0-9]+(\.[0-9]+)?[Ff]")]
    Float,

    #[regex(r"[0-9]+\.[0-9]+[Dd]?")]
    #[regex(r"[0-9]+[Dd]")]
    Double,

    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\]|\\.)*'")]
    String,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token("::")]
    ColonColon,

    #[token("===")]
    EqEqEq,

    #[token("!==")]
    BangEqEq,

    #[token("==")]
    EqEq,

    #[token("!=")]
    BangEq,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("=>")]
    FatArrow,

    #[token("++")]
    PlusPlus,

    #[token("+=")]
    PlusEq,

    #[token("--")]
    MinusMinus,

    #[token("-=")]
    MinusEq,

    #[token("*=")]
    StarEq,

    #[token("/=")]
    SlashEq,

    #[token("%=")]
    PercentEq,

    #[token("&&")]
    AmpAmp,

    #[token("||")]
    PipePipe,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("?")]
    Question,
    #[token("!")]
    Bang,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,

    // =========================================================================
    // KEYWORDS (alphabetical, longest match wins in logos)
    // =========================================================================
    #[token("as")]
    AsKw,
    #[token("assert")]
    AssertKw,
    #[token("async")]
    AsyncKw,
    #[token("break")]
    BreakKw,
    #[token("catch")]
    CatchKw,
    #[token("continue")]
    ContinueKw,
    #[token("else")]
    ElseKw,
    #[token("exit")]
    ExitKw,
    #[token("false")]
    FalseKw,
    #[token("finally")]
    FinallyKw,
    #[token("for")]
    ForKw,
    #[token("if")]
    IfKw,
    #[token("import")]
    ImportKw,
    #[token("in")]
    InKw,
    #[token("new")]
    NewKw,
    #[token("null")]
    NullKw,
    #[token("return")]
    ReturnKw,
    #[token("try")]
    TryKw,
    #[token("true")]
    TrueKw,
    #[token("undefined")]
    UndefinedKw,
    #[token("var")]
    VarKw,
    #[token("while")]
    WhileKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            // Literals
            Ident => SyntaxKind::IDENT,
            Integer => SyntaxKind::INTEGER,
            Long => SyntaxKind::LONG,
            Float => SyntaxKind::FLOAT,
            Double => SyntaxKind::DOUBLE,
            String => SyntaxKind::STRING,

            // Multi-char punctuation
            ColonColon => SyntaxKind::COLON_COLON,
            EqEqEq => SyntaxKind::EQ_EQ_EQ,
            BangEqEq => SyntaxKind::BANG_EQ_EQ,
            EqEq => SyntaxKind::EQ_EQ,
            BangEq => SyntaxKind::BANG_EQ,
            LtEq => SyntaxKind::LT_EQ,
            GtEq => SyntaxKind::GT_EQ,
            FatArrow => SyntaxKind::FAT_ARROW,
            PlusPlus => SyntaxKind::PLUS_PLUS,
            PlusEq => SyntaxKind::PLUS_EQ,
            MinusMinus => SyntaxKind::MINUS_MINUS,
            MinusEq => SyntaxKind::MINUS_EQ,
            StarEq => SyntaxKind::STAR_EQ,
            SlashEq => SyntaxKind::SLASH_EQ,
            PercentEq => SyntaxKind::PERCENT_EQ,
            AmpAmp => SyntaxKind::AMP_AMP,
            PipePipe => SyntaxKind::PIPE_PIPE,

            // Single-char punctuation
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Semicolon => SyntaxKind::SEMICOLON,
            Colon => SyntaxKind::COLON,
            Dot => SyntaxKind::DOT,
            Comma => SyntaxKind::COMMA,
            Eq => SyntaxKind::EQ,
            Lt => SyntaxKind::LT,
            Gt => SyntaxKind::GT,
            Plus => SyntaxKind::PLUS,
            Minus => SyntaxKind::MINUS,
            Star => SyntaxKind::STAR,
            Slash => SyntaxKind::SLASH,
            Percent => SyntaxKind::PERCENT,
            Question => SyntaxKind::QUESTION,
            Bang => SyntaxKind::BANG,
            Amp => SyntaxKind::AMP,
            Pipe => SyntaxKind::PIPE,
            Caret => SyntaxKind::CARET,

            // Keywords
            AsKw => SyntaxKind::AS_KW,
            AssertKw => SyntaxKind::ASSERT_KW,
            AsyncKw => SyntaxKind::ASYNC_KW,
            BreakKw => SyntaxKind::BREAK_KW,
            CatchKw => SyntaxKind::CATCH_KW,
            ContinueKw => SyntaxKind::CONTINUE_KW,
            ElseKw => SyntaxKind::ELSE_KW,
            ExitKw => SyntaxKind::EXIT_KW,
            FalseKw => SyntaxKind::FALSE_KW,
            FinallyKw => SyntaxKind::FINALLY_KW,
            ForKw => SyntaxKind::FOR_KW,
            IfKw => SyntaxKind::IF_KW,
            ImportKw => SyntaxKind::IMPORT_KW,
            InKw => SyntaxKind::IN_KW,
            NewKw => SyntaxKind::NEW_KW,
            NullKw => SyntaxKind::NULL_KW,
            ReturnKw => SyntaxKind::RETURN_KW,
            TryKw => SyntaxKind::TRY_KW,
            TrueKw => SyntaxKind::TRUE_KW,
            UndefinedKw => SyntaxKind::UNDEFINED_KW,
            VarKw => SyntaxKind::VAR_KW,
            WhileKw => SyntaxKind::WHILE_KW,
        }
    }
}
