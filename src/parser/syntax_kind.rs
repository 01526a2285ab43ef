//! Syntax kinds for the rowan-based Magic Script CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! Magic Script is a small, dynamically typed scripting DSL for HTTP/database
//! API handlers, so the grammar is expression-centric.

/// All syntax kinds (tokens and nodes) in Magic Script
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (statements, call chains, literals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERAL TOKENS
    // =========================================================================
    IDENT,          // identifier
    INTEGER,        // 42
    LONG,           // 42L
    FLOAT,          // 2.5F
    DOUBLE,         // 3.14 or 3.14D
    STRING,         // "hello" or 'hello'

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,        // {
    R_BRACE,        // }
    L_BRACKET,      // [
    R_BRACKET,      // ]
    L_PAREN,        // (
    R_PAREN,        // )
    SEMICOLON,      // ;
    COLON,          // :
    COLON_COLON,    // :: (type conversion)
    DOT,            // .
    COMMA,          // ,
    EQ,             // =
    EQ_EQ,          // ==
    EQ_EQ_EQ,       // ===
    BANG_EQ,        // !=
    BANG_EQ_EQ,     // !==
    LT,             // <
    GT,             // >
    LT_EQ,          // <=
    GT_EQ,          // >=
    FAT_ARROW,      // => (lambda)
    PLUS,           // +
    PLUS_PLUS,      // ++
    PLUS_EQ,        // +=
    MINUS,          // -
    MINUS_MINUS,    // --
    MINUS_EQ,       // -=
    STAR,           // *
    STAR_EQ,        // *=
    SLASH,          // /
    SLASH_EQ,       // /=
    PERCENT,        // %
    PERCENT_EQ,     // %=
    QUESTION,       // ?
    BANG,           // !
    AMP,            // &
    AMP_AMP,        // &&
    PIPE,           // |
    PIPE_PIPE,      // ||
    CARET,          // ^

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    VAR_KW,
    IF_KW,
    ELSE_KW,
    FOR_KW,
    IN_KW,
    WHILE_KW,
    RETURN_KW,
    BREAK_KW,
    CONTINUE_KW,
    TRY_KW,
    CATCH_KW,
    FINALLY_KW,
    IMPORT_KW,
    AS_KW,
    NEW_KW,
    ASYNC_KW,
    EXIT_KW,
    ASSERT_KW,
    TRUE_KW,
    FALSE_KW,
    NULL_KW,
    UNDEFINED_KW,

    // =========================================================================
    // COMPOSITE NODES (non-terminals in the grammar)
    // =========================================================================
    // Root
    SOURCE_FILE,

    // Statements
    VAR_STMT,
    EXPR_STMT,
    IF_STMT,
    FOR_STMT,
    WHILE_STMT,
    RETURN_STMT,
    BREAK_STMT,
    CONTINUE_STMT,
    IMPORT_STMT,
    TRY_STMT,
    CATCH_CLAUSE,
    FINALLY_CLAUSE,
    EXIT_STMT,
    ASSERT_STMT,
    BLOCK,

    // Expressions
    LITERAL,
    NAME_REF,
    PAREN_EXPR,
    ARRAY_EXPR,
    MAP_EXPR,
    MAP_ENTRY,
    LAMBDA_EXPR,
    PARAM_LIST,
    PARAM,
    MEMBER_EXPR,
    CALL_EXPR,
    INDEX_EXPR,
    CONVERT_EXPR,
    NEW_EXPR,
    UNARY_EXPR,
    BINARY_EXPR,
    TERNARY_EXPR,
    ASSIGN_EXPR,
    ARG_LIST,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::VAR_KW as u16) && (self as u16) <= (Self::UNDEFINED_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::CARET as u16)
    }

    /// Check if this token can start a literal value
    pub fn is_literal_token(self) -> bool {
        matches!(
            self,
            Self::INTEGER
                | Self::LONG
                | Self::FLOAT
                | Self::DOUBLE
                | Self::STRING
                | Self::TRUE_KW
                | Self::FALSE_KW
                | Self::NULL_KW
                | Self::UNDEFINED_KW
        )
    }

    /// Check if this is a number literal token
    pub fn is_number(self) -> bool {
        matches!(self, Self::INTEGER | Self::LONG | Self::FLOAT | Self::DOUBLE)
    }
}

/// Keyword spellings in statement order, for completion lists
pub fn keyword_names() -> &'static [&'static str] {
    &[
        "var", "if", "else", "for", "in", "while", "return", "break", "continue", "try",
        "catch", "finally", "import", "as", "new", "async", "exit", "assert", "true", "false",
        "null", "undefined",
    ]
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MagicLanguage {}

impl rowan::Language for MagicLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<MagicLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<MagicLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<MagicLanguage>;
