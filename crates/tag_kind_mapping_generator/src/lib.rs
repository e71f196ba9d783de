use std::fmt::{Display, Formatter};
use std::io::Write;

use thiserror::Error;

use tag_kind_core::{default_records, RecordError, RecordList, TagRecord};

pub use service::TagKindService;

mod service;

/// Name of the enum that generated arms refer to unless told otherwise.
pub static DEFAULT_ENUM_NAME: &str = "TagKind";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum MappingDirection {
    /// Tag string to enum variant: `"html" => TagKind::Html,`
    Forward,
    /// Enum variant to owned tag string: `TagKind::Html => String::from("html")`
    Reverse,
}

impl MappingDirection {
    pub fn format_entry(&self, enum_name: &str, record: &TagRecord) -> String {
        match self {
            MappingDirection::Forward => {
                format!("\"{}\" => {enum_name}::{},", record.tag(), record.variant())
            }
            MappingDirection::Reverse => format!(
                "{enum_name}::{} => String::from(\"{}\")",
                record.variant(),
                record.tag()
            ),
        }
    }
}

impl Display for MappingDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MappingDirection::Forward => f.write_str("forward"),
            MappingDirection::Reverse => f.write_str("reverse"),
        }
    }
}

/// What a mapping pass does when it reaches a line that could not be parsed as a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum MalformedRecordPolicy {
    /// Stop this pass. Entries already written are kept and the next pass still runs.
    #[cfg_attr(feature = "clap", value(name = "abort"))]
    AbortPass,
    /// Leave the line out and keep going.
    #[cfg_attr(feature = "clap", value(name = "skip"))]
    SkipRecord,
    /// Stop the whole run with an error.
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingOptions {
    pub enum_name: String,
    pub forward_policy: MalformedRecordPolicy,
    pub reverse_policy: MalformedRecordPolicy,
    /// Passes to run, in order.
    pub directions: Vec<MappingDirection>,
}

impl MappingOptions {
    pub fn policy_for(&self, direction: MappingDirection) -> MalformedRecordPolicy {
        match direction {
            MappingDirection::Forward => self.forward_policy,
            MappingDirection::Reverse => self.reverse_policy,
        }
    }
}

impl Default for MappingOptions {
    fn default() -> Self {
        Self {
            enum_name: DEFAULT_ENUM_NAME.to_string(),
            forward_policy: MalformedRecordPolicy::AbortPass,
            reverse_policy: MalformedRecordPolicy::Fail,
            directions: vec![MappingDirection::Forward, MappingDirection::Reverse],
        }
    }
}

/// Summary of a single completed pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassOutcome {
    pub direction: MappingDirection,
    pub emitted: usize,
    pub skipped: usize,
    /// Line number of the malformed record that stopped the pass, if it was aborted.
    pub aborted_at: Option<usize>,
}

impl PassOutcome {
    fn new(direction: MappingDirection) -> Self {
        Self {
            direction,
            emitted: 0,
            skipped: 0,
            aborted_at: None,
        }
    }
}

/// Both mappings as individual lines, without line terminators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingLines {
    pub forward: Vec<String>,
    pub reverse: Vec<String>,
}

#[derive(Debug, Error)]
pub enum MappingGeneratorError {
    #[error("Malformed tag kind record on line {line} during the {direction} pass: {source}")]
    MalformedRecord {
        line: usize,
        direction: MappingDirection,
        source: RecordError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type MappingResult<T> = Result<T, MappingGeneratorError>;

/// Writes one mapping pass over a record list, one match arm per line.
pub struct TagKindMappingGenerator<'a, W: Write + ?Sized> {
    records: &'a RecordList,
    direction: MappingDirection,
    policy: MalformedRecordPolicy,
    enum_name: &'a str,
    output: &'a mut W,
}

impl<'a, W: Write + ?Sized> TagKindMappingGenerator<'a, W> {
    pub fn new(
        records: &'a RecordList,
        direction: MappingDirection,
        policy: MalformedRecordPolicy,
        enum_name: &'a str,
        output: &'a mut W,
    ) -> Self {
        Self {
            records,
            direction,
            policy,
            enum_name,
            output,
        }
    }
}

impl<W: Write + ?Sized> TagKindService for TagKindMappingGenerator<'_, W> {
    type Result = MappingResult<PassOutcome>;

    fn run(&mut self) -> Self::Result {
        let mut outcome = PassOutcome::new(self.direction);

        for line in self.records {
            let record = match &line.record {
                Ok(record) => record,
                Err(error) => match self.policy {
                    MalformedRecordPolicy::AbortPass => {
                        log::warn!(
                            "{} pass stopped at line {}: {error}",
                            self.direction,
                            line.line
                        );
                        outcome.aborted_at = Some(line.line);
                        break;
                    }
                    MalformedRecordPolicy::SkipRecord => {
                        log::warn!(
                            "{} pass skipped line {}: {error}",
                            self.direction,
                            line.line
                        );
                        outcome.skipped += 1;
                        continue;
                    }
                    MalformedRecordPolicy::Fail => {
                        return Err(MappingGeneratorError::MalformedRecord {
                            line: line.line,
                            direction: self.direction,
                            source: error.clone(),
                        });
                    }
                },
            };

            writeln!(
                self.output,
                "{}",
                self.direction.format_entry(self.enum_name, record)
            )?;
            outcome.emitted += 1;
        }

        Ok(outcome)
    }
}

/// Write every pass requested by `options` to `output`, in order.
///
/// Entries are written as they are produced, so when a pass fails everything before the
/// offending line has already reached `output`.
pub fn emit<W: Write + ?Sized>(
    records: &RecordList,
    options: &MappingOptions,
    output: &mut W,
) -> MappingResult<Vec<PassOutcome>> {
    let mut outcomes = Vec::with_capacity(options.directions.len());
    for &direction in &options.directions {
        let outcome = TagKindMappingGenerator::new(
            records,
            direction,
            options.policy_for(direction),
            &options.enum_name,
            &mut *output,
        )
        .run()?;
        log::info!(
            "{direction} mapping: {} entries written, {} skipped",
            outcome.emitted,
            outcome.skipped
        );
        outcomes.push(outcome);
    }
    output.flush()?;

    Ok(outcomes)
}

/// Generate both mappings for `records` in memory.
pub fn generate_from(
    records: &RecordList,
    options: &MappingOptions,
) -> MappingResult<MappingLines> {
    let mut lines = MappingLines::default();
    for &direction in &options.directions {
        let mut buffer = vec![];
        TagKindMappingGenerator::new(
            records,
            direction,
            options.policy_for(direction),
            &options.enum_name,
            &mut buffer,
        )
        .run()?;

        let target = match direction {
            MappingDirection::Forward => &mut lines.forward,
            MappingDirection::Reverse => &mut lines.reverse,
        };
        target.extend(String::from_utf8_lossy(&buffer).lines().map(String::from));
    }

    Ok(lines)
}

/// Generate both mappings for the built-in tag kind list with the default options.
pub fn generate() -> MappingResult<MappingLines> {
    generate_from(default_records(), &MappingOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(MappingDirection::Forward, "Html", "html", r#""html" => TagKind::Html,"#; "forward")]
    #[test_case(MappingDirection::Reverse, "Html", "html", r#"TagKind::Html => String::from("html")"#; "reverse")]
    #[test_case(MappingDirection::Forward, "Heading(u32)", "h{level}", r#""h{level}" => TagKind::Heading(u32),"#; "forward_parameterized")]
    #[test_case(MappingDirection::Reverse, "Heading(u32)", "h{level}", r#"TagKind::Heading(u32) => String::from("h{level}")"#; "reverse_parameterized")]
    fn formats_entry(direction: MappingDirection, variant: &str, tag: &str, expected: &str) {
        let record = TagRecord::new(variant, tag);
        assert_eq!(expected, direction.format_entry(DEFAULT_ENUM_NAME, &record));
    }

    #[test]
    fn custom_enum_name() {
        let record = TagRecord::new("Div", "div");
        assert_eq!(
            r#""div" => HtmlTag::Div,"#,
            MappingDirection::Forward.format_entry("HtmlTag", &record)
        );
    }

    #[test]
    fn default_options_match_pass_behavior() {
        let options = MappingOptions::default();
        assert_eq!(
            MalformedRecordPolicy::AbortPass,
            options.policy_for(MappingDirection::Forward)
        );
        assert_eq!(
            MalformedRecordPolicy::Fail,
            options.policy_for(MappingDirection::Reverse)
        );
        assert_eq!(
            vec![MappingDirection::Forward, MappingDirection::Reverse],
            options.directions
        );
    }
}
