mod json_writer;
mod md_writer;

use serde::de::{Deserialize, Deserializer, Error as _};
use strum::{Display, EnumString};

pub use self::{json_writer::JsonWriter, md_writer::MarkdownWriter};
use crate::{error::Result, typegroup::TypeGroup};

/// Output format of a rollup, `output-format` in `.rollup.toml`. Parsing
/// ignores ASCII case.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum ChangelogFormat {
    Json,
    #[default]
    Markdown,
}

impl<'de> Deserialize<'de> for ChangelogFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(D::Error::custom)
    }
}

/// Renders a `TypeGroup` into some output.
///
/// Implementors walk `TypeGroup::ordered`, so sections come out in
/// `CommitType::PRIORITY` order and types with no entries are never written.
/// `MarkdownWriter` and `JsonWriter` are the two provided here.
pub trait FormatWriter {
    fn write_summary(&mut self, group: &TypeGroup) -> Result<()>;
}
