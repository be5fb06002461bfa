use crate::descriptor_generation::domain::ClassCatalog;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns to prevent DoS attacks
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// ClassFilter - Removes source classes from component processing
///
/// Patterns match qualified class names. `*` matches zero or more characters;
/// everything else must match literally, and the pattern covers the whole name
/// (`com.example.*` matches `com.example.Foo` but not `org.com.example.Foo`).
/// Excluded classes stay in the catalog as external classes so that other
/// components can still inherit from them.
#[derive(Debug)]
pub struct ClassFilter {
    patterns: Vec<ExcludePattern>,
}

impl ClassFilter {
    /// Creates a new ClassFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (length, characters)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Demotes every matching source class to an external class
    ///
    /// Returns the qualified names of the excluded classes, sorted.
    pub fn apply(&self, catalog: &mut ClassCatalog) -> Vec<String> {
        let excluded: Vec<String> = catalog
            .source_classes()
            .filter(|class| self.matches(class.name()))
            .map(|class| class.name().to_string())
            .collect();

        for name in &excluded {
            catalog.mark_external(name);
        }
        excluded
    }

    /// Checks if a class name matches any exclusion pattern
    pub fn matches(&self, class_name: &str) -> bool {
        // every pattern is evaluated so that the matched flags stay accurate
        self.patterns
            .iter()
            .fold(false, |found, pattern| pattern.matches(class_name) || found)
    }

    /// Returns the patterns that did not match any class so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

/// Represents a single exclusion pattern with its compiled matcher
#[derive(Debug)]
struct ExcludePattern {
    original: String,
    matcher: PatternMatcher,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;

        let matcher = compile_pattern(&pattern);

        Ok(Self {
            original: pattern,
            matcher,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, class_name: &str) -> bool {
        let is_match = self.matcher.matches(class_name);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

/// Pattern matcher types for efficient matching
#[derive(Debug)]
enum PatternMatcher {
    /// Exact match: "com.example.Foo"
    Exact(String),
    /// Leading wildcard: "*Impl"
    Suffix(String),
    /// Trailing wildcard: "com.example.*"
    Prefix(String),
    /// Wildcards on both ends: "*.internal.*"
    Contains(String),
    /// General case, anchored at whichever ends carry no wildcard
    Glob {
        parts: Vec<String>,
        anchored_start: bool,
        anchored_end: bool,
    },
}

impl PatternMatcher {
    fn matches(&self, class_name: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => class_name == s,
            PatternMatcher::Suffix(suffix) => class_name.ends_with(suffix),
            PatternMatcher::Prefix(prefix) => class_name.starts_with(prefix),
            PatternMatcher::Contains(middle) => class_name.contains(middle),
            PatternMatcher::Glob {
                parts,
                anchored_start,
                anchored_end,
            } => glob_matches(class_name, parts, *anchored_start, *anchored_end),
        }
    }
}

fn glob_matches(name: &str, parts: &[String], anchored_start: bool, anchored_end: bool) -> bool {
    let mut rest = name;
    let last = parts.len().saturating_sub(1);
    for (index, part) in parts.iter().enumerate() {
        if index == 0 && anchored_start {
            match rest.strip_prefix(part.as_str()) {
                Some(remaining) => rest = remaining,
                None => return false,
            }
        } else if index == last && anchored_end {
            return rest.len() >= part.len() && rest.ends_with(part.as_str());
        } else {
            match rest.find(part.as_str()) {
                Some(pos) => rest = &rest[pos + part.len()..],
                None => return false,
            }
        }
    }
    !anchored_end || rest.is_empty()
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    for ch in pattern.chars() {
        if !is_valid_pattern_char(ch) {
            anyhow::bail!(
                "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
                 Only alphanumeric, underscores, dollar signs, dots, and asterisks (*) are allowed.",
                ch,
                pattern
            );
        }
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

/// Characters allowed in qualified class names, plus the wildcard
fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$' || c == '.' || c == '*'
}

fn compile_pattern(pattern: &str) -> PatternMatcher {
    let wildcard_count = pattern.matches('*').count();
    let starts = pattern.starts_with('*');
    let ends = pattern.ends_with('*');

    match wildcard_count {
        0 => PatternMatcher::Exact(pattern.to_string()),
        1 if starts => PatternMatcher::Suffix(pattern[1..].to_string()),
        1 if ends => PatternMatcher::Prefix(pattern[..pattern.len() - 1].to_string()),
        2 if starts && ends && pattern.len() > 2 => {
            PatternMatcher::Contains(pattern[1..pattern.len() - 1].to_string())
        }
        _ => PatternMatcher::Glob {
            parts: pattern
                .split('*')
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect(),
            anchored_start: !starts,
            anchored_end: !ends,
        },
    }
}
