//! Syntax file wrapper for parsed Magic Script documents.
//!
//! This module provides a unified interface for working with parsed scripts
//! from the rowan-based parser.

use crate::base::LineIndex;
use crate::parser::{AstNode, Parse, SourceFile, Stmt, SyntaxToken, parse};
use rowan::{TextSize, TokenAtOffset};

/// A parsed script that wraps a rowan Parse result.
///
/// Cheap to clone: the green tree is shared.
#[derive(Debug, Clone)]
pub struct ScriptFile {
    parse: Parse,
}

// Two ScriptFiles are equal if they hold the same green tree
impl PartialEq for ScriptFile {
    fn eq(&self, other: &Self) -> bool {
        self.parse.green == other.parse.green
    }
}

impl Eq for ScriptFile {}

impl ScriptFile {
    /// Parse source text into a script file
    pub fn new(source: &str) -> Self {
        Self {
            parse: parse(source),
        }
    }

    /// Get the underlying parse result
    pub fn parse(&self) -> &Parse {
        &self.parse
    }

    /// Get the root source file AST node
    pub fn source_file(&self) -> Option<SourceFile> {
        SourceFile::cast(self.parse.syntax_node())
    }

    /// Check if parsing had errors
    pub fn has_errors(&self) -> bool {
        !self.parse.errors.is_empty()
    }

    /// Get parse errors
    pub fn errors(&self) -> &[crate::parser::SyntaxError] {
        &self.parse.errors
    }

    /// Extract import targets from the script, aliases stripped
    pub fn extract_imports(&self) -> Vec<String> {
        let Some(source_file) = self.source_file() else {
            return Vec::new();
        };

        source_file
            .statements()
            .filter_map(|stmt| {
                if let Stmt::Import(import) = stmt {
                    import.target()
                } else {
                    None
                }
            })
            .collect()
    }

    /// The token at a byte offset, preferring the non-trivia token that
    /// ends there. Cursor positions sit between tokens; for completion and
    /// hover the token just typed (to the left) is the interesting one.
    pub fn token_at_offset(&self, offset: TextSize) -> Option<SyntaxToken> {
        let root = self.parse.syntax_node();
        if offset > root.text_range().end() {
            return None;
        }
        match root.token_at_offset(offset) {
            TokenAtOffset::None => None,
            TokenAtOffset::Single(token) => Some(token),
            TokenAtOffset::Between(left, right) => {
                if left.kind().is_trivia() && !right.kind().is_trivia() {
                    Some(right)
                } else {
                    Some(left)
                }
            }
        }
    }

    /// Get the source text of the script
    pub fn source_text(&self) -> String {
        self.parse.syntax_node().text().to_string()
    }

    /// Create a LineIndex for converting byte offsets to line/column positions
    pub fn line_index(&self) -> LineIndex {
        LineIndex::new(&self.source_text())
    }
}
