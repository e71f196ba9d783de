use std::path::Path;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::{parse_record, RecordError, RecordListError, RecordListResult, TagRecord};

static DEFAULT_RECORDS: Lazy<RecordList> =
    Lazy::new(|| RecordList::parse(crate::DEFAULT_TAG_KIND_LIST));

/// The built-in tag kind list, parsed once on first use.
pub fn default_records() -> &'static RecordList {
    &DEFAULT_RECORDS
}

/// One non-blank line of a tag kind list, along with the result of parsing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLine {
    /// 1-based line number in the source text.
    pub line: usize,
    pub text: String,
    pub record: Result<TagRecord, RecordError>,
}

impl RecordLine {
    pub fn is_malformed(&self) -> bool {
        self.record.is_err()
    }
}

/// An ordered list of parsed lines. Malformed lines are kept in place so that consumers can
/// decide for themselves whether to skip them, stop, or fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordList {
    lines: Vec<RecordLine>,
}

impl RecordList {
    /// Parse every line of `text`. Blank lines, including the one left behind by a trailing line
    /// break, are not records and are dropped.
    pub fn parse(text: &str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                let record = parse_record(line);
                match &record {
                    Ok(record) => log::debug!(
                        "line {}: `{}` => `{}`",
                        index + 1,
                        record.variant(),
                        record.tag()
                    ),
                    Err(error) => log::debug!("line {}: malformed record: {error}", index + 1),
                }
                RecordLine {
                    line: index + 1,
                    text: line.to_string(),
                    record,
                }
            })
            .collect();

        Self { lines }
    }

    pub fn from_file(path: &Path) -> RecordListResult<Self> {
        if !path.is_file() {
            return Err(RecordListError::InvalidPath(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordLine> {
        self.lines.iter()
    }

    /// Only the well-formed records, in list order.
    pub fn records(&self) -> impl Iterator<Item = &TagRecord> {
        self.lines.iter().filter_map(|line| line.record.as_ref().ok())
    }

    pub fn malformed(&self) -> impl Iterator<Item = &RecordLine> {
        self.lines.iter().filter(|line| line.is_malformed())
    }

    /// Number of non-blank lines, malformed ones included.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Variant names that appear on more than one well-formed line, with every line number they
    /// appear on. Ordered by first occurrence.
    pub fn duplicate_variants(&self) -> Vec<(&str, Vec<usize>)> {
        self.duplicates_by(|record| record.variant())
    }

    /// Tag texts that appear on more than one well-formed line, with every line number they
    /// appear on. Ordered by first occurrence.
    pub fn duplicate_tags(&self) -> Vec<(&str, Vec<usize>)> {
        self.duplicates_by(|record| record.tag())
    }

    fn duplicates_by<'a>(
        &'a self,
        key: impl Fn(&'a TagRecord) -> &'a str,
    ) -> Vec<(&'a str, Vec<usize>)> {
        let mut seen: FxHashMap<&str, Vec<usize>> = FxHashMap::default();
        let mut order = vec![];
        for line in &self.lines {
            let Ok(record) = &line.record else {
                continue;
            };
            let name = key(record);
            let occurrences = seen.entry(name).or_default();
            if occurrences.is_empty() {
                order.push(name);
            }
            occurrences.push(line.line);
        }

        order
            .into_iter()
            .filter_map(|name| {
                let occurrences = seen.remove(name)?;
                (occurrences.len() > 1).then_some((name, occurrences))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a RecordList {
    type Item = &'a RecordLine;
    type IntoIter = std::slice::Iter<'a, RecordLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[test]
fn test_trailing_line_break_is_not_a_record() {
    let list = RecordList::parse("Html, // <html>\nBody, // <body>\n");
    assert_eq!(2, list.len());
    assert_eq!(0, list.malformed().count());
}

#[test]
fn test_line_numbers_skip_blank_lines() {
    let list = RecordList::parse("Html, // <html>\n\n   \nBody, // <body>");
    let lines: Vec<usize> = list.iter().map(|line| line.line).collect();
    assert_eq!(vec![1, 4], lines);
}

#[test]
fn test_duplicates_are_reported_in_first_occurrence_order() {
    let list = RecordList::parse(
        "B, // <b>\nBold, // <b>\nA, // <a>\nB, // <strong>\nbroken\nLink, // <a>",
    );
    assert_eq!(vec![("B", vec![1, 4])], list.duplicate_variants());
    assert_eq!(
        vec![("b", vec![1, 2]), ("a", vec![3, 6])],
        list.duplicate_tags()
    );
}
