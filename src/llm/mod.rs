//! LLM fallback - an optional collaborator consulted when rule-based
//! confidence is low.
//!
//! The parser depends only on the `QueryCompletion` trait; absence of a
//! client simply disables the fallback path. `OllamaClient` is the shipped
//! implementation.

mod ollama;
pub mod prompts;

use anyhow::Result;

pub use ollama::OllamaClient;

/// A text-completion service usable as parse fallback.
///
/// Implementations own their transport and timeout policy; the parser makes
/// a single attempt per parse call and treats every error as "keep the rule
/// result".
pub trait QueryCompletion: Send + Sync {
    /// Whether the service is reachable and ready. Checked before each
    /// fallback attempt; a cheap probe, not a guarantee.
    fn is_available(&self) -> bool {
        true
    }

    /// Run one completion for the given prompt.
    fn complete(&self, prompt: &str) -> Result<String>;
}

/// Longer replies than this cannot be a boolean expression for one query.
const MAX_COMPLETION_LEN: usize = 200;

/// Normalize a raw completion into an IMS expression, or reject it.
///
/// Takes the first non-empty line, drops an echoed "IMS Syntax:" prefix,
/// collapses whitespace, and rejects anything that cannot be a well-formed
/// expression (unbalanced phrase quotes, prompt echo, absurd length). A
/// rejection means the rules result stands.
pub fn normalize_completion(raw: &str) -> Option<String> {
    let line = raw.lines().map(str::trim).find(|l| !l.is_empty())?;
    let line = line.strip_prefix("IMS Syntax:").unwrap_or(line).trim();

    let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() || collapsed.len() > MAX_COMPLETION_LEN {
        return None;
    }
    if collapsed.matches('\'').count() % 2 != 0 {
        return None;
    }
    // Anything with a colon is the model chatting, not an expression.
    if collapsed.contains(':') {
        return None;
    }
    Some(collapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_clean_expression() {
        assert_eq!(
            normalize_completion("+error +crash timeout").as_deref(),
            Some("+error +crash timeout")
        );
    }

    #[test]
    fn test_strips_prefix_and_collapses_whitespace() {
        assert_eq!(
            normalize_completion("IMS Syntax:  +error   +crash\nextra chatter").as_deref(),
            Some("+error +crash")
        );
    }

    #[test]
    fn test_takes_first_non_empty_line() {
        assert_eq!(
            normalize_completion("\n\n'out of memory'\n").as_deref(),
            Some("'out of memory'")
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(normalize_completion(""), None);
        assert_eq!(normalize_completion("   \n  "), None);
        assert_eq!(normalize_completion("'unbalanced phrase"), None);
        assert_eq!(normalize_completion("Sure! Here is the answer: +error"), None);
        let long = "term ".repeat(100);
        assert_eq!(normalize_completion(&long), None);
    }
}
