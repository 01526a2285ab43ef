//! Literal classification
//!
//! Maps raw literal text to a type name by running the real lexer over it
//! and inspecting the token shape. Total: unrecognizable text yields the
//! `unknown` sentinel, never an error.

use super::types::type_names;
use crate::parser::{SyntaxKind, tokenize};
use smol_str::SmolStr;

/// Classify a literal's source text.
///
/// Recognizes quoted strings, integers, longs (`42L`), doubles (`3.14`),
/// floats (`2.5F`), booleans, bracketed arrays, braced maps, and
/// `null`/`undefined`. A leading sign on a number is accepted.
pub fn classify_literal(text: &str) -> SmolStr {
    let tokens: Vec<_> = tokenize(text.trim())
        .into_iter()
        .filter(|t| !t.kind.is_trivia())
        .collect();

    let (first, last) = match (tokens.first(), tokens.last()) {
        (Some(f), Some(l)) => (f.kind, l.kind),
        _ => return SmolStr::new_static(type_names::UNKNOWN),
    };

    // Bracketed shapes may span many tokens
    if first == SyntaxKind::L_BRACKET && last == SyntaxKind::R_BRACKET {
        return SmolStr::new_static(type_names::ARRAY);
    }
    if first == SyntaxKind::L_BRACE && last == SyntaxKind::R_BRACE {
        return SmolStr::new_static(type_names::MAP);
    }

    // A signed number is two tokens; anything else must be a single token
    let value = match tokens.as_slice() {
        [single] => single,
        [sign, number]
            if matches!(sign.kind, SyntaxKind::PLUS | SyntaxKind::MINUS)
                && number.kind.is_number() =>
        {
            number
        }
        _ => return SmolStr::new_static(type_names::UNKNOWN),
    };

    let name = match value.kind {
        SyntaxKind::STRING => type_names::STRING,
        SyntaxKind::INTEGER => type_names::INTEGER,
        SyntaxKind::LONG => type_names::LONG,
        SyntaxKind::DOUBLE => type_names::DOUBLE,
        SyntaxKind::FLOAT => type_names::FLOAT,
        SyntaxKind::TRUE_KW | SyntaxKind::FALSE_KW => type_names::BOOLEAN,
        SyntaxKind::NULL_KW | SyntaxKind::UNDEFINED_KW => type_names::NULL,
        _ => type_names::UNKNOWN,
    };
    SmolStr::new_static(name)
}
