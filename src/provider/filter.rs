//! Resource name include/skip lists
//!
//! Entries are regular expressions matched anywhere in the resource name, so
//! `aws_vpc$` matches `aws_vpc` but not `aws_vpc_endpoint`, while `aws_vpc`
//! matches both. Anchor with `^`/`$` to pin either end.

use regex::Regex;

use crate::error::{Error, Result};

/// Compiled list of resource name patterns
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    patterns: Vec<Regex>,
}

impl NameFilter {
    pub fn compile<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let patterns = entries
            .iter()
            .map(|entry| {
                let entry = entry.as_ref();
                Regex::new(entry).map_err(|source| Error::Pattern {
                    pattern: entry.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// True if any pattern matches somewhere in the name
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(name))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
