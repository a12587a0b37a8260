//! Sort keys for glossary table rows.
//!
//! The key is built from the first cell of a row: an optional leading
//! particle such as `(an)` or `to` is dropped, whitespace runs become
//! hyphens, and everything except lowercase ASCII letters and hyphens is
//! removed. Extraction never fails; a cell that yields nothing sorts first.

use std::sync::LazyLock;

use regex::Regex;

/// Particles dropped from the start of a phrase, tried in this order.
pub const DEFAULT_PARTICLES: &[&str] = &["an", "a", "to", "on"];

static DEFAULT_PHRASE_REGEX: LazyLock<Regex> = LazyLock::new(|| phrase_regex(DEFAULT_PARTICLES).unwrap());
static WHITESPACE_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static NON_KEY_CHAR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z-]").unwrap());

/// Build the phrase pattern: optional `(particle)` plus whitespace, then the
/// rest of the cell captured in group 1.
fn phrase_regex<S: AsRef<str>>(particles: &[S]) -> Result<Regex, regex::Error> {
    if particles.is_empty() {
        return Regex::new(r"^(.+?)$");
    }
    let alternatives = particles
        .iter()
        .map(|p| regex::escape(p.as_ref()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"^(?:\(?(?:{alternatives})\)?\s+)?(.+?)$"))
}

#[derive(Debug, Clone)]
pub struct KeyExtractor {
    phrase: Regex,
}

impl Default for KeyExtractor {
    fn default() -> Self {
        Self {
            phrase: DEFAULT_PHRASE_REGEX.clone(),
        }
    }
}

impl KeyExtractor {
    pub fn new<S: AsRef<str>>(particles: &[S]) -> Result<Self, regex::Error> {
        let is_default = particles.len() == DEFAULT_PARTICLES.len()
            && particles.iter().zip(DEFAULT_PARTICLES).all(|(a, b)| a.as_ref() == *b);
        if is_default {
            return Ok(Self::default());
        }
        Ok(Self {
            phrase: phrase_regex(particles)?,
        })
    }

    /// Sort key for one table row line.
    pub fn row_key(&self, row: &str) -> String {
        let cell = row.split('|').next().unwrap_or_default().trim();
        self.phrase_key(cell)
    }

    /// Sort key for an already extracted cell.
    pub fn phrase_key(&self, cell: &str) -> String {
        let Some(phrase) = self.phrase.captures(cell).and_then(|caps| caps.get(1)) else {
            return String::new();
        };
        let hyphenated = WHITESPACE_RUN_REGEX.replace_all(phrase.as_str(), "-");
        let lowered = hyphenated.to_ascii_lowercase();
        NON_KEY_CHAR_REGEX.replace_all(&lowered, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(row: &str) -> String {
        KeyExtractor::default().row_key(row)
    }

    #[test]
    fn test_particle_in_parentheses() {
        assert_eq!(key("(an) Apple | noun | ябълка |"), "apple");
        assert_eq!(key("(to) run | verb | тичам |"), "run");
        assert_eq!(key("(on) call | adj | дежурен |"), "call");
    }

    #[test]
    fn test_particle_without_parentheses() {
        assert_eq!(key("a cache | noun |"), "cache");
        assert_eq!(key("to deploy | verb |"), "deploy");
    }

    #[test]
    fn test_multi_word_phrase() {
        assert_eq!(key("Banana Split | noun | ..."), "banana-split");
        assert_eq!(key("| load   balancer\t pool | x |"), "");
        assert_eq!(key("load   balancer\t pool | x |"), "load-balancer-pool");
    }

    #[test]
    fn test_particle_needs_whitespace() {
        assert_eq!(key("an | article |"), "an");
        assert_eq!(key("(a)b | x |"), "ab");
        assert_eq!(key("anaconda | snake |"), "anaconda");
        assert_eq!(key("on-call | adj |"), "on-call");
    }

    #[test]
    fn test_particle_is_case_sensitive() {
        assert_eq!(key("An apple | noun |"), "an-apple");
        assert_eq!(key("(To) go | verb |"), "to-go");
    }

    #[test]
    fn test_non_letters_are_removed() {
        assert_eq!(key("C++ compiler | noun |"), "c-compiler");
        assert_eq!(key("HTTP/2 | noun |"), "http");
        assert_eq!(key("`async` | keyword |"), "async");
        assert_eq!(key("??? | x |"), "");
    }

    #[test]
    fn test_empty_and_whitespace_cells() {
        assert_eq!(key(""), "");
        assert_eq!(key("   | noun |"), "");
        assert_eq!(key("\n"), "");
        assert_eq!(key("|---|---|"), "");
    }

    #[test]
    fn test_row_without_pipes_uses_whole_line() {
        assert_eq!(key("plain line\n"), "plain-line");
    }

    #[test]
    fn test_custom_particles() {
        let extractor = KeyExtractor::new(&["the"]).unwrap();
        assert_eq!(extractor.row_key("the system | noun |"), "system");
        assert_eq!(extractor.row_key("a system | noun |"), "a-system");
    }

    #[test]
    fn test_no_particles() {
        let extractor = KeyExtractor::new::<&str>(&[]).unwrap();
        assert_eq!(extractor.row_key("(an) apple | noun |"), "an-apple");
    }

    #[test]
    fn test_default_particles_reuse_static_pattern() {
        let extractor = KeyExtractor::new(DEFAULT_PARTICLES).unwrap();
        assert_eq!(extractor.row_key("(a) byte | noun |"), "byte");
    }
}
