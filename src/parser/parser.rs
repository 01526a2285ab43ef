//! Recursive-descent parser for Magic Script
//!
//! Builds a lossless rowan green tree from the token stream. Every byte of
//! the input ends up in the tree, including trivia and malformed fragments,
//! so IDE features can operate on incomplete code.

use super::lexer::{Token, tokenize};
use super::syntax_kind::{SyntaxKind, SyntaxNode};
use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// A parse error with location information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Result of parsing: a green tree plus any errors encountered
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    pub fn syntax_node(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse source text into a syntax tree
pub fn parse(input: &str) -> Parse {
    let tokens = tokenize(input);
    let mut parser = Parser::new(&tokens);
    parser.parse_source_file();
    let (green, errors) = parser.finish();
    Parse { green, errors }
}

struct Parser<'a, 'b> {
    tokens: &'b [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a, 'b> Parser<'a, 'b> {
    fn new(tokens: &'b [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> (GreenNode, Vec<SyntaxError>) {
        (self.builder.finish(), self.errors)
    }

    // =========================================================================
    // TOKEN CURSOR
    // =========================================================================

    /// Current token kind, looking past trivia. EOF yields ERROR.
    fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    /// Nth non-trivia token kind after the cursor
    fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::ERROR)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    fn at_eof(&self) -> bool {
        self.tokens[self.pos..].iter().all(|t| t.kind.is_trivia())
    }

    /// Add trivia tokens to the tree up to the next meaningful token
    fn eat_trivia(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.do_bump();
        }
    }

    /// Move the current token (plus leading trivia) into the tree
    fn bump(&mut self) {
        self.eat_trivia();
        if self.pos < self.tokens.len() {
            self.do_bump();
        }
    }

    /// Bump the current token but record it under a different kind
    fn bump_as(&mut self, kind: SyntaxKind) {
        self.eat_trivia();
        if self.pos < self.tokens.len() {
            let token = &self.tokens[self.pos];
            self.builder.token(kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn do_bump(&mut self) {
        let token = &self.tokens[self.pos];
        self.builder.token(token.kind.into(), token.text);
        self.pos += 1;
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            self.error(format!("expected {:?}", kind));
            false
        }
    }

    fn error(&mut self, message: impl Into<String>) {
        let range = self.current_range();
        self.errors.push(SyntaxError::new(message, range));
    }

    fn current_range(&self) -> TextRange {
        self.tokens[self.pos..]
            .iter()
            .find(|t| !t.kind.is_trivia())
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| {
                let end = self
                    .tokens
                    .last()
                    .map(|t| t.offset + TextSize::of(t.text))
                    .unwrap_or_default();
                TextRange::empty(end)
            })
    }

    fn start_node(&mut self, kind: SyntaxKind) {
        self.eat_trivia();
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn checkpoint(&mut self) -> Checkpoint {
        self.eat_trivia();
        self.builder.checkpoint()
    }

    // =========================================================================
    // STATEMENTS
    // =========================================================================

    fn parse_source_file(&mut self) {
        self.builder.start_node(SyntaxKind::SOURCE_FILE.into());
        while !self.at_eof() {
            self.parse_statement();
        }
        self.eat_trivia();
        self.builder.finish_node();
    }

    fn parse_statement(&mut self) {
        match self.current() {
            SyntaxKind::VAR_KW => self.parse_var_stmt(),
            SyntaxKind::IF_KW => self.parse_if_stmt(),
            SyntaxKind::FOR_KW => self.parse_for_stmt(),
            SyntaxKind::WHILE_KW => self.parse_while_stmt(),
            SyntaxKind::RETURN_KW => self.parse_return_stmt(),
            SyntaxKind::BREAK_KW => self.parse_simple_stmt(SyntaxKind::BREAK_STMT),
            SyntaxKind::CONTINUE_KW => self.parse_simple_stmt(SyntaxKind::CONTINUE_STMT),
            SyntaxKind::IMPORT_KW => self.parse_import_stmt(),
            SyntaxKind::TRY_KW => self.parse_try_stmt(),
            SyntaxKind::EXIT_KW => self.parse_exit_stmt(),
            SyntaxKind::ASSERT_KW => self.parse_assert_stmt(),
            SyntaxKind::L_BRACE => self.parse_block(),
            SyntaxKind::SEMICOLON => {
                // Stray semicolon, consume without a node
                self.bump();
            }
            SyntaxKind::R_BRACE | SyntaxKind::ERROR => {
                self.error("unexpected token");
                self.start_node(SyntaxKind::ERROR);
                self.bump();
                self.finish_node();
            }
            _ => self.parse_expr_stmt(),
        }
    }

    /// `var name = expr;`
    fn parse_var_stmt(&mut self) {
        self.start_node(SyntaxKind::VAR_STMT);
        self.bump(); // var
        if self.at(SyntaxKind::IDENT) {
            self.bump();
        } else {
            self.error("expected variable name");
        }
        if self.at(SyntaxKind::EQ) {
            self.bump();
            self.parse_expr();
        }
        self.eat_semicolon();
        self.finish_node();
    }

    fn parse_if_stmt(&mut self) {
        self.start_node(SyntaxKind::IF_STMT);
        self.bump(); // if
        self.expect(SyntaxKind::L_PAREN);
        self.parse_expr();
        self.expect(SyntaxKind::R_PAREN);
        self.parse_statement();
        if self.at(SyntaxKind::ELSE_KW) {
            self.bump();
            self.parse_statement();
        }
        self.finish_node();
    }

    /// `for (item in list) body` or `for (key, value in map) body`
    fn parse_for_stmt(&mut self) {
        self.start_node(SyntaxKind::FOR_STMT);
        self.bump(); // for
        self.expect(SyntaxKind::L_PAREN);
        if self.at(SyntaxKind::VAR_KW) {
            self.bump();
        }
        if self.at(SyntaxKind::IDENT) {
            self.bump();
        } else {
            self.error("expected loop variable");
        }
        if self.at(SyntaxKind::COMMA) {
            self.bump();
            self.expect(SyntaxKind::IDENT);
        }
        self.expect(SyntaxKind::IN_KW);
        self.parse_expr();
        self.expect(SyntaxKind::R_PAREN);
        self.parse_statement();
        self.finish_node();
    }

    fn parse_while_stmt(&mut self) {
        self.start_node(SyntaxKind::WHILE_STMT);
        self.bump(); // while
        self.expect(SyntaxKind::L_PAREN);
        self.parse_expr();
        self.expect(SyntaxKind::R_PAREN);
        self.parse_statement();
        self.finish_node();
    }

    fn parse_return_stmt(&mut self) {
        self.start_node(SyntaxKind::RETURN_STMT);
        self.bump(); // return
        if !self.at(SyntaxKind::SEMICOLON) && !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
            self.parse_expr();
        }
        self.eat_semicolon();
        self.finish_node();
    }

    fn parse_simple_stmt(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.eat_semicolon();
        self.finish_node();
    }

    /// `import "module.path"` or `import ident.path as alias`
    fn parse_import_stmt(&mut self) {
        self.start_node(SyntaxKind::IMPORT_STMT);
        self.bump(); // import
        if self.at(SyntaxKind::STRING) {
            self.bump();
        } else if self.at(SyntaxKind::IDENT) {
            self.bump();
            while self.at(SyntaxKind::DOT) {
                self.bump();
                self.expect(SyntaxKind::IDENT);
            }
        } else {
            self.error("expected import path");
        }
        if self.at(SyntaxKind::AS_KW) {
            self.bump();
            self.expect(SyntaxKind::IDENT);
        }
        self.eat_semicolon();
        self.finish_node();
    }

    fn parse_try_stmt(&mut self) {
        self.start_node(SyntaxKind::TRY_STMT);
        self.bump(); // try
        self.parse_block_or_error();
        if self.at(SyntaxKind::CATCH_KW) {
            self.start_node(SyntaxKind::CATCH_CLAUSE);
            self.bump();
            if self.at(SyntaxKind::L_PAREN) {
                self.bump();
                self.expect(SyntaxKind::IDENT);
                self.expect(SyntaxKind::R_PAREN);
            }
            self.parse_block_or_error();
            self.finish_node();
        }
        if self.at(SyntaxKind::FINALLY_KW) {
            self.start_node(SyntaxKind::FINALLY_CLAUSE);
            self.bump();
            self.parse_block_or_error();
            self.finish_node();
        }
        self.finish_node();
    }

    fn parse_exit_stmt(&mut self) {
        self.start_node(SyntaxKind::EXIT_STMT);
        self.bump(); // exit
        if !self.at(SyntaxKind::SEMICOLON) && !self.at_eof() {
            self.parse_expr();
            while self.at(SyntaxKind::COMMA) {
                self.bump();
                self.parse_expr();
            }
        }
        self.eat_semicolon();
        self.finish_node();
    }

    fn parse_assert_stmt(&mut self) {
        self.start_node(SyntaxKind::ASSERT_STMT);
        self.bump(); // assert
        self.parse_expr();
        if self.at(SyntaxKind::COLON) {
            self.bump();
            self.parse_expr();
            while self.at(SyntaxKind::COMMA) {
                self.bump();
                self.parse_expr();
            }
        }
        self.eat_semicolon();
        self.finish_node();
    }

    fn parse_block(&mut self) {
        self.start_node(SyntaxKind::BLOCK);
        self.bump(); // {
        while !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
            self.parse_statement();
        }
        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    fn parse_block_or_error(&mut self) {
        if self.at(SyntaxKind::L_BRACE) {
            self.parse_block();
        } else {
            self.error("expected block");
        }
    }

    fn parse_expr_stmt(&mut self) {
        self.start_node(SyntaxKind::EXPR_STMT);
        self.parse_expr();
        self.eat_semicolon();
        self.finish_node();
    }

    fn eat_semicolon(&mut self) {
        // Semicolons are optional at statement end
        if self.at(SyntaxKind::SEMICOLON) {
            self.bump();
        }
    }

    // =========================================================================
    // EXPRESSIONS
    // =========================================================================

    fn parse_expr(&mut self) {
        self.parse_assign_expr();
    }

    /// Assignment is right-associative and lowest precedence
    fn parse_assign_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_ternary_expr();
        if matches!(
            self.current(),
            SyntaxKind::EQ
                | SyntaxKind::PLUS_EQ
                | SyntaxKind::MINUS_EQ
                | SyntaxKind::STAR_EQ
                | SyntaxKind::SLASH_EQ
                | SyntaxKind::PERCENT_EQ
        ) {
            self.builder
                .start_node_at(checkpoint, SyntaxKind::ASSIGN_EXPR.into());
            self.bump();
            self.parse_assign_expr();
            self.finish_node();
        }
    }

    fn parse_ternary_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_binary_expr(0);
        if self.at(SyntaxKind::QUESTION) {
            self.builder
                .start_node_at(checkpoint, SyntaxKind::TERNARY_EXPR.into());
            self.bump();
            self.parse_expr();
            self.expect(SyntaxKind::COLON);
            self.parse_expr();
            self.finish_node();
        }
    }

    /// Pratt loop over binary operators
    fn parse_binary_expr(&mut self, min_bp: u8) {
        let checkpoint = self.checkpoint();
        self.parse_unary_expr();
        loop {
            let Some(bp) = binary_binding_power(self.current()) else {
                break;
            };
            if bp < min_bp {
                break;
            }
            self.builder
                .start_node_at(checkpoint, SyntaxKind::BINARY_EXPR.into());
            self.bump(); // operator
            self.parse_binary_expr(bp + 1);
            self.finish_node();
        }
    }

    fn parse_unary_expr(&mut self) {
        match self.current() {
            SyntaxKind::BANG
            | SyntaxKind::MINUS
            | SyntaxKind::PLUS
            | SyntaxKind::PLUS_PLUS
            | SyntaxKind::MINUS_MINUS => {
                self.start_node(SyntaxKind::UNARY_EXPR);
                self.bump();
                self.parse_unary_expr();
                self.finish_node();
            }
            _ => self.parse_postfix_expr(),
        }
    }

    /// Postfix chains: member access, calls, indexing, `::type` conversion
    fn parse_postfix_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_primary_expr();
        loop {
            match self.current() {
                SyntaxKind::DOT => {
                    self.builder
                        .start_node_at(checkpoint, SyntaxKind::MEMBER_EXPR.into());
                    self.bump(); // .
                    if self.at(SyntaxKind::IDENT) || self.current().is_keyword() {
                        // Keywords are valid member names after a dot
                        self.bump_as(SyntaxKind::IDENT);
                    } else {
                        // Dangling dot: keep the node so completion can see it
                        self.error("expected member name");
                    }
                    self.finish_node();
                }
                SyntaxKind::L_PAREN => {
                    self.builder
                        .start_node_at(checkpoint, SyntaxKind::CALL_EXPR.into());
                    self.parse_arg_list();
                    self.finish_node();
                }
                SyntaxKind::L_BRACKET => {
                    self.builder
                        .start_node_at(checkpoint, SyntaxKind::INDEX_EXPR.into());
                    self.bump(); // [
                    self.parse_expr();
                    self.expect(SyntaxKind::R_BRACKET);
                    self.finish_node();
                }
                SyntaxKind::COLON_COLON => {
                    self.builder
                        .start_node_at(checkpoint, SyntaxKind::CONVERT_EXPR.into());
                    self.bump(); // ::
                    if self.at(SyntaxKind::IDENT) {
                        self.bump();
                    } else {
                        self.error("expected target type after '::'");
                    }
                    // Optional arguments, e.g. ::date('yyyy-MM-dd')
                    if self.at(SyntaxKind::L_PAREN) {
                        self.parse_arg_list();
                    }
                    self.finish_node();
                }
                SyntaxKind::PLUS_PLUS | SyntaxKind::MINUS_MINUS => {
                    self.builder
                        .start_node_at(checkpoint, SyntaxKind::UNARY_EXPR.into());
                    self.bump();
                    self.finish_node();
                }
                _ => break,
            }
        }
    }

    fn parse_arg_list(&mut self) {
        self.start_node(SyntaxKind::ARG_LIST);
        self.bump(); // (
        while !self.at(SyntaxKind::R_PAREN) && !self.at_eof() {
            self.parse_expr();
            if self.at(SyntaxKind::COMMA) {
                self.bump();
            } else {
                break;
            }
        }
        self.expect(SyntaxKind::R_PAREN);
        self.finish_node();
    }

    fn parse_primary_expr(&mut self) {
        match self.current() {
            SyntaxKind::INTEGER
            | SyntaxKind::LONG
            | SyntaxKind::FLOAT
            | SyntaxKind::DOUBLE
            | SyntaxKind::STRING
            | SyntaxKind::TRUE_KW
            | SyntaxKind::FALSE_KW
            | SyntaxKind::NULL_KW
            | SyntaxKind::UNDEFINED_KW => {
                self.start_node(SyntaxKind::LITERAL);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::IDENT => {
                if self.nth(1) == SyntaxKind::FAT_ARROW {
                    self.parse_lambda_single_param();
                } else {
                    self.start_node(SyntaxKind::NAME_REF);
                    self.bump();
                    self.finish_node();
                }
            }
            SyntaxKind::ASYNC_KW => {
                // `async expr` marks an asynchronous evaluation
                self.start_node(SyntaxKind::UNARY_EXPR);
                self.bump();
                self.parse_unary_expr();
                self.finish_node();
            }
            SyntaxKind::L_PAREN => {
                if self.lambda_params_ahead() {
                    self.parse_lambda_paren_params();
                } else {
                    self.start_node(SyntaxKind::PAREN_EXPR);
                    self.bump(); // (
                    self.parse_expr();
                    self.expect(SyntaxKind::R_PAREN);
                    self.finish_node();
                }
            }
            SyntaxKind::L_BRACKET => self.parse_array_expr(),
            SyntaxKind::L_BRACE => self.parse_map_expr(),
            SyntaxKind::NEW_KW => self.parse_new_expr(),
            _ => {
                self.error(format!("expected expression, found {:?}", self.current()));
                self.start_node(SyntaxKind::ERROR);
                if !self.at_eof() && !self.at(SyntaxKind::SEMICOLON) && !self.at(SyntaxKind::R_BRACE)
                {
                    self.bump();
                }
                self.finish_node();
            }
        }
    }

    /// Look ahead from `(` to decide between lambda params and a paren expr.
    /// Lambda when a `)` at depth zero is immediately followed by `=>`.
    fn lambda_params_ahead(&self) -> bool {
        let mut depth = 0usize;
        let mut iter = self.tokens[self.pos..].iter().filter(|t| !t.kind.is_trivia());
        while let Some(token) = iter.next() {
            match token.kind {
                SyntaxKind::L_PAREN => depth += 1,
                SyntaxKind::R_PAREN => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return iter.next().map(|t| t.kind) == Some(SyntaxKind::FAT_ARROW);
                    }
                }
                SyntaxKind::SEMICOLON | SyntaxKind::L_BRACE | SyntaxKind::R_BRACE => return false,
                _ => {}
            }
        }
        false
    }

    /// `x => body`
    fn parse_lambda_single_param(&mut self) {
        self.start_node(SyntaxKind::LAMBDA_EXPR);
        self.start_node(SyntaxKind::PARAM_LIST);
        self.start_node(SyntaxKind::PARAM);
        self.bump(); // ident
        self.finish_node();
        self.finish_node();
        self.bump(); // =>
        self.parse_lambda_body();
        self.finish_node();
    }

    /// `(a, b) => body`
    fn parse_lambda_paren_params(&mut self) {
        self.start_node(SyntaxKind::LAMBDA_EXPR);
        self.start_node(SyntaxKind::PARAM_LIST);
        self.bump(); // (
        while !self.at(SyntaxKind::R_PAREN) && !self.at_eof() {
            self.start_node(SyntaxKind::PARAM);
            if self.at(SyntaxKind::IDENT) {
                self.bump();
            } else {
                self.error("expected parameter name");
                self.bump();
            }
            self.finish_node();
            if self.at(SyntaxKind::COMMA) {
                self.bump();
            } else {
                break;
            }
        }
        self.expect(SyntaxKind::R_PAREN);
        self.finish_node();
        self.expect(SyntaxKind::FAT_ARROW);
        self.parse_lambda_body();
        self.finish_node();
    }

    fn parse_lambda_body(&mut self) {
        if self.at(SyntaxKind::L_BRACE) {
            self.parse_block();
        } else {
            self.parse_expr();
        }
    }

    fn parse_array_expr(&mut self) {
        self.start_node(SyntaxKind::ARRAY_EXPR);
        self.bump(); // [
        while !self.at(SyntaxKind::R_BRACKET) && !self.at_eof() {
            self.parse_expr();
            if self.at(SyntaxKind::COMMA) {
                self.bump();
            } else {
                break;
            }
        }
        self.expect(SyntaxKind::R_BRACKET);
        self.finish_node();
    }

    /// `{ key: value, 'other': value }`
    fn parse_map_expr(&mut self) {
        self.start_node(SyntaxKind::MAP_EXPR);
        self.bump(); // {
        while !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
            self.start_node(SyntaxKind::MAP_ENTRY);
            match self.current() {
                SyntaxKind::IDENT | SyntaxKind::STRING | SyntaxKind::INTEGER => self.bump(),
                k if k.is_keyword() => self.bump_as(SyntaxKind::IDENT),
                _ => self.error("expected map key"),
            }
            if self.expect(SyntaxKind::COLON) {
                self.parse_expr();
            }
            self.finish_node();
            if self.at(SyntaxKind::COMMA) {
                self.bump();
            } else {
                break;
            }
        }
        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    /// `new TypeName(args)`
    fn parse_new_expr(&mut self) {
        self.start_node(SyntaxKind::NEW_EXPR);
        self.bump(); // new
        if self.at(SyntaxKind::IDENT) {
            self.bump();
            while self.at(SyntaxKind::DOT) {
                self.bump();
                self.expect(SyntaxKind::IDENT);
            }
        } else {
            self.error("expected type name after 'new'");
        }
        if self.at(SyntaxKind::L_PAREN) {
            self.parse_arg_list();
        }
        self.finish_node();
    }
}

/// Binding power for binary operators. Higher binds tighter.
fn binary_binding_power(kind: SyntaxKind) -> Option<u8> {
    let bp = match kind {
        SyntaxKind::PIPE_PIPE => 1,
        SyntaxKind::AMP_AMP => 2,
        SyntaxKind::PIPE => 3,
        SyntaxKind::CARET => 4,
        SyntaxKind::AMP => 5,
        SyntaxKind::EQ_EQ
        | SyntaxKind::BANG_EQ
        | SyntaxKind::EQ_EQ_EQ
        | SyntaxKind::BANG_EQ_EQ => 6,
        SyntaxKind::LT | SyntaxKind::GT | SyntaxKind::LT_EQ | SyntaxKind::GT_EQ => 7,
        SyntaxKind::PLUS | SyntaxKind::MINUS => 8,
        SyntaxKind::STAR | SyntaxKind::SLASH | SyntaxKind::PERCENT => 9,
        _ => return None,
    };
    Some(bp)
}
