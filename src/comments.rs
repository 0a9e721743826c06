//! Field comments with generator markers
//!
//! A field description may carry marker lines that tell the code generator
//! how to tag the emitted field, e.g. `+terrajet:crd:field:TFTag=-` keeps the
//! field out of the Terraform serialization. [`Comment`] separates the prose
//! from the markers and renders them back in a canonical form.

use std::fmt;

use thiserror::Error;

/// Prefix shared by all generator markers
pub const MARKER_PREFIX: &str = "+terrajet:";

const TF_TAG_MARKER: &str = "crd:field:TFTag";
const CRD_TAG_MARKER: &str = "crd:field:CRDTag";

/// Errors produced while parsing markers out of a comment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommentError {
    #[error("unknown marker {0:?}")]
    UnknownMarker(String),

    #[error("marker {0:?} has no value")]
    MissingValue(String),
}

/// Explicit option applied on top of markers found in the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentOption {
    TfTag(String),
    CrdTag(String),
}

/// Tags the generator reads from a comment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags {
    pub tf: Option<String>,
    pub crd: Option<String>,
}

/// Comment text with its markers parsed out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    text: String,
    tags: Tags,
}

impl Comment {
    /// Parse `text` and apply `options`. Options win over markers in the text.
    pub fn new(text: &str, options: &[CommentOption]) -> Result<Self, CommentError> {
        let mut tags = Tags::default();
        let mut prose = String::with_capacity(text.len());

        for line in text.split_inclusive('\n') {
            let trimmed = line.trim();
            let Some(marker) = trimmed.strip_prefix(MARKER_PREFIX) else {
                prose.push_str(line);
                continue;
            };
            let Some((key, value)) = marker.split_once('=') else {
                return Err(CommentError::MissingValue(trimmed.to_string()));
            };
            match key {
                TF_TAG_MARKER => tags.tf = Some(value.to_string()),
                CRD_TAG_MARKER => tags.crd = Some(value.to_string()),
                _ => return Err(CommentError::UnknownMarker(trimmed.to_string())),
            }
        }

        for option in options {
            match option {
                CommentOption::TfTag(v) => tags.tf = Some(v.clone()),
                CommentOption::CrdTag(v) => tags.crd = Some(v.clone()),
            }
        }

        Ok(Self { text: prose, tags })
    }

    /// Prose without marker lines
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tf_tag(&self) -> Option<&str> {
        self.tags.tf.as_deref()
    }

    pub fn crd_tag(&self) -> Option<&str> {
        self.tags.crd.as_deref()
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            f.write_str("\n")?;
        }
        if let Some(tag) = &self.tags.tf {
            writeln!(f, "{MARKER_PREFIX}{TF_TAG_MARKER}={tag}")?;
        }
        if let Some(tag) = &self.tags.crd {
            writeln!(f, "{MARKER_PREFIX}{CRD_TAG_MARKER}={tag}")?;
        }
        Ok(())
    }
}
