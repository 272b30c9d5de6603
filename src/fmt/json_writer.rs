use std::io;

use log::debug;
use serde::Serialize;

use crate::{
    entry::{ClassifiedEntry, CommitType},
    error::Result,
    fmt::FormatWriter,
    typegroup::TypeGroup,
};

/// Wraps a `std::io::Write` object to write the summary in a JSON format
///
/// # Example
///
/// ```no_run
/// # use std::io::{stdout, BufWriter};
/// # use changelog_rollup::{Rollup, fmt::JsonWriter};
/// let rollup = Rollup::new().unwrap();
///
/// let out = stdout();
/// let mut out_buf = BufWriter::new(out.lock());
/// let mut writer = JsonWriter::new(&mut out_buf);
///
/// rollup.write_summary_with(&mut writer).unwrap();
/// ```
pub struct JsonWriter<'a>(&'a mut dyn io::Write);

impl<'a> JsonWriter<'a> {
    /// Creates a new instance of the `JsonWriter` struct using a
    /// `std::io::Write` object.
    pub fn new<T: io::Write>(writer: &'a mut T) -> JsonWriter<'a> { JsonWriter(writer) }
}

#[derive(Serialize)]
struct Section<'a> {
    #[serde(rename = "type")]
    commit_type: CommitType,
    emoji: &'static str,
    entries: &'a [ClassifiedEntry],
}

impl<'a> FormatWriter for JsonWriter<'a> {
    fn write_summary(&mut self, group: &TypeGroup) -> Result<()> {
        debug!("Writing JSON summary");
        let sections = group
            .ordered()
            .map(|(commit_type, entries)| Section {
                commit_type,
                emoji: commit_type.emoji(),
                entries,
            })
            .collect::<Vec<_>>();

        serde_json::to_writer(&mut *self.0, &sections)?;
        self.0.flush().map_err(Into::into)
    }
}
