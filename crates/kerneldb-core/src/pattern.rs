//! # Pattern Compiler
//!
//! Turns wildcarded file-name templates into exact-match patterns, and holds
//! the token cleaning shared by both grammar parsers.
//!
//! Every run of consecutive [`PLACEHOLDER`] characters becomes a fixed-width
//! digit class: `MK????.TXT` compiles to `MK[0-9]{4}.TXT`. All other
//! characters are copied verbatim.

use crate::primitives::PLACEHOLDER;

/// Compile a file-name template into an exact-match pattern.
///
/// Runs are replaced independently and in order; a single placeholder still
/// produces `[0-9]{1}`.
pub fn compile(template: &str) -> String {
    let mut pattern = String::with_capacity(template.len() + 8);
    let mut run = 0usize;

    for ch in template.chars() {
        if ch == PLACEHOLDER {
            run += 1;
            continue;
        }
        if run > 0 {
            push_digit_class(&mut pattern, run);
            run = 0;
        }
        pattern.push(ch);
    }
    if run > 0 {
        push_digit_class(&mut pattern, run);
    }

    pattern
}

fn push_digit_class(pattern: &mut String, width: usize) {
    pattern.push_str("[0-9]{");
    pattern.push_str(&width.to_string());
    pattern.push('}');
}

// =============================================================================
// TOKEN CLEANING
// =============================================================================

/// Strip quoting and continuation noise from a single value token.
///
/// Quotes are removed everywhere; whitespace, parentheses and backslashes are
/// trimmed from both ends.
pub fn clean_token(raw: &str) -> String {
    let unquoted: String = raw.chars().filter(|c| *c != '"' && *c != '\'').collect();
    unquoted
        .trim_matches(|c: char| c.is_whitespace() || c == '(' || c == ')' || c == '\\')
        .to_string()
}

/// Split an attribute right-hand side on commas and clean each token.
///
/// Empty tokens are dropped.
pub fn split_values(rhs: &str) -> Vec<String> {
    rhs.split(',')
        .map(clean_token)
        .filter(|token| !token.is_empty())
        .collect()
}
