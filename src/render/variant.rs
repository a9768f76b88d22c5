//! Secondary runtime variant derivation.
//!
//! The secondary variant's dependency text is the primary variant's rendered
//! text with the primary token rewritten, never a second query.

use crate::domain::RuntimeVariant;
use crate::error::RenderError;
use fancy_regex::{NoExpand, Regex};

pub struct VariantSubstitution {
    pattern: Regex,
    replacement: String,
}

impl VariantSubstitution {
    pub fn new(primary: &RuntimeVariant, secondary: &RuntimeVariant) -> Result<Self, RenderError> {
        if primary.token.is_empty() || secondary.token.is_empty() {
            return Err(RenderError::EmptyToken);
        }
        // Whole words only: `python3-foo` must not become `python33-foo`. The
        // edges are lookarounds rather than `\b` so tokens such as `g++` match.
        let token = fancy_regex::escape(&primary.token);
        let pattern = format!(r"(?<![A-Za-z0-9_]){}(?![A-Za-z0-9_])", token);
        let pattern = Regex::new(&pattern).map_err(|source| RenderError::Token {
            token: primary.token.clone(),
            source: Box::new(source),
        })?;
        Ok(Self { pattern, replacement: secondary.token.clone() })
    }

    pub fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, NoExpand(&self.replacement)).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn substitution() -> VariantSubstitution {
        VariantSubstitution::new(
            &RuntimeVariant::new("python", "PYTHON2"),
            &RuntimeVariant::new("python3", "PYTHON3"),
        )
        .expect("substitution")
    }

    #[test]
    fn rewrites_every_whole_word_occurrence() {
        let sub = substitution();
        assert_eq!(
            sub.apply("python-construct (>= 2.5.2), python-six, libfoo-python"),
            "python3-construct (>= 2.5.2), python3-six, libfoo-python3"
        );
    }

    #[test]
    fn leaves_partial_words_alone() {
        let sub = substitution();
        assert_eq!(sub.apply("python3-yaml pythonic cpython"), "python3-yaml pythonic cpython");
    }

    #[test]
    fn symbol_edged_tokens_are_rewritten() {
        let sub = VariantSubstitution::new(
            &RuntimeVariant::new("g++", "GCC"),
            &RuntimeVariant::new("clang++", "CLANG"),
        )
        .expect("substitution");
        assert_eq!(sub.apply("g++-libs, libstdc++-dev"), "clang++-libs, libstdc++-dev");
        assert_eq!(sub.apply("g++ g++,g++"), "clang++ clang++,clang++");
        assert_eq!(sub.apply("xg++ g++x"), "xg++ g++x");
    }

    #[test]
    fn replacement_is_literal() {
        let sub = VariantSubstitution::new(
            &RuntimeVariant::new("lua", "LUA"),
            &RuntimeVariant::new("$lua5", "LUA5"),
        )
        .expect("substitution");
        assert_eq!(sub.apply("lua-socket"), "$lua5-socket");
    }

    #[test]
    fn empty_token_is_rejected() {
        let result =
            VariantSubstitution::new(&RuntimeVariant::new("", "A"), &RuntimeVariant::new("b", "B"));
        assert!(matches!(result, Err(RenderError::EmptyToken)));
    }
}
