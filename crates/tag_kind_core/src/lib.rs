pub use error::{RecordError, RecordListError, RecordListResult};
pub use list::{default_records, RecordLine, RecordList};
pub use record::{parse_record, TagRecord};

mod error;
mod list;
mod record;

/// The built-in tag kind list. Each line pairs an enum variant with the HTML tag it stands for,
/// written as a trailing comment:
///
/// ```text
/// Html, // <html>
/// Heading(u32), // <h{level}>
/// ```
pub static DEFAULT_TAG_KIND_LIST: &str = include_str!("../data/tag_kinds.list");
