use std::path::PathBuf;

use tag_kind_mapping_generator::{
    MalformedRecordPolicy, MappingDirection, MappingOptions, DEFAULT_ENUM_NAME,
};

/// Print the match arms mapping HTML tag names to `TagKind` variants and back.
///
/// The tag string to variant arms are printed first, followed by the variant to tag string arms.
#[derive(Debug, Clone, clap::Parser)]
#[clap(name = "gen-tag-kind-mappings", rename_all = "kebab-case")]
pub struct GenerateArgs {
    /// Tag kind list to read, one `Variant, // <tag>` entry per line. The built-in list is used
    /// when omitted.
    #[clap(long, short, env = "TAG_KIND_LIST", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the mappings to this file instead of stdout. The file is only written when every
    /// requested pass succeeds.
    #[clap(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Name of the enum the generated arms refer to.
    #[clap(long, default_value = DEFAULT_ENUM_NAME, value_name = "NAME")]
    pub enum_name: String,

    /// What the tag string to variant pass does with a malformed line.
    #[clap(long, value_enum, default_value = "abort")]
    pub forward_policy: MalformedRecordPolicy,

    /// What the variant to tag string pass does with a malformed line.
    #[clap(long, value_enum, default_value = "fail")]
    pub reverse_policy: MalformedRecordPolicy,

    /// Only print one of the two mappings.
    #[clap(long, value_enum)]
    pub only: Option<MappingDirection>,
}

impl GenerateArgs {
    pub fn mapping_options(&self) -> MappingOptions {
        let directions = match self.only {
            Some(direction) => vec![direction],
            None => vec![MappingDirection::Forward, MappingDirection::Reverse],
        };

        MappingOptions {
            enum_name: self.enum_name.clone(),
            forward_policy: self.forward_policy,
            reverse_policy: self.reverse_policy,
            directions,
        }
    }
}
