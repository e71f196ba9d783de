use crate::RecordError;

/// A single enum variant paired with the HTML tag text it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagRecord {
    variant: String,
    tag: String,
}

impl TagRecord {
    pub fn new(variant: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            tag: tag.into(),
        }
    }

    /// The variant exactly as written in the list, including any parameter declaration like
    /// `Heading(u32)`.
    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// Parse one line of the tag kind list.
///
/// The variant is everything before the first `,`. The tag is taken from the remainder of the
/// line: everything after the first `<`, up to the next `>`. Any commentary following the
/// closing `>` is ignored, and a missing `>` keeps the whole remainder as the tag.
pub fn parse_record(line: &str) -> Result<TagRecord, RecordError> {
    let bytes = line.as_bytes();
    let separator = memchr::memchr(b',', bytes).ok_or(RecordError::MissingSeparator)?;
    let variant = &line[..separator];
    let comment = &line[separator + 1..];

    let open = memchr::memchr(b'<', comment.as_bytes())
        .ok_or_else(|| RecordError::MissingTagOpen(comment.trim().to_string()))?;
    let tag = &comment[open + 1..];
    let tag = match memchr::memchr(b'>', tag.as_bytes()) {
        Some(close) => &tag[..close],
        None => tag,
    };

    Ok(TagRecord::new(variant, tag))
}
