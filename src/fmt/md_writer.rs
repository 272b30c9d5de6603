use std::io;

use crate::{
    entry::{ClassifiedEntry, CommitType},
    error::Result,
    fmt::FormatWriter,
    typegroup::TypeGroup,
};

/// Wraps a `std::io::Write` object to write the summary in a Markdown format
///
/// # Example
///
/// ```no_run
/// # use std::fs::File;
/// # use changelog_rollup::{Rollup, fmt::MarkdownWriter};
/// let rollup = Rollup::new().unwrap();
///
/// // Create a file to hold our results, which the MarkdownWriter will wrap
/// let mut file = File::create("RELEASE.md").unwrap();
/// let mut writer = MarkdownWriter::new(&mut file);
///
/// rollup.write_summary_with(&mut writer).unwrap();
/// ```
pub struct MarkdownWriter<'a>(&'a mut dyn io::Write);

impl<'a> MarkdownWriter<'a> {
    /// Creates a new instance of the `MarkdownWriter` struct using a
    /// `std::io::Write` object.
    pub fn new<T: io::Write + 'a>(writer: &'a mut T) -> MarkdownWriter<'a> {
        MarkdownWriter(writer)
    }

    /// Writes a particular section of the summary
    fn write_section(
        &mut self,
        commit_type: CommitType,
        entries: &[ClassifiedEntry],
    ) -> Result<()> {
        writeln!(self.0, "## {} {} ", commit_type.emoji(), commit_type)?;

        for entry in entries {
            write!(self.0, "- ")?;
            if entry.breaking {
                write!(self.0, "**BREAKING** ")?;
            }
            writeln!(self.0, "**{}**: {}", entry.scope, entry.subject)?;
        }

        Ok(())
    }
}

impl<'a> FormatWriter for MarkdownWriter<'a> {
    fn write_summary(&mut self, group: &TypeGroup) -> Result<()> {
        for (commit_type, entries) in group.ordered() {
            self.write_section(commit_type, entries)?;
        }

        self.0.flush().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{changelog::LogItem, classify::Classifier};

    fn render(items: Vec<LogItem>) -> String {
        let tg = TypeGroup::from_log_items(items, &Classifier::new());
        let mut out = Vec::new();
        MarkdownWriter::new(&mut out).write_summary(&tg).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn item(package: &str, comments: &[&str]) -> LogItem {
        LogItem {
            package: package.into(),
            comments: comments.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn two_packages() {
        let out = render(vec![
            item("pkg-a", &["feat: add X", "feat: add X"]),
            item("pkg-b", &["fix(core): patch Y"]),
        ]);
        assert_eq!(
            out,
            "## 🆕 feat \n- **pkg-a**: add X\n## 🐛 fix \n- **core**: patch Y\n"
        );
    }

    #[test]
    fn breaking_entries_are_flagged() {
        let out = render(vec![item("pkg-a", &["refactor(api)!: rename"])]);
        assert_eq!(out, "## 🔨 refactor \n- **BREAKING** **api**: rename\n");
    }

    #[test]
    fn sections_follow_priority_not_input_order() {
        let out = render(vec![item("pkg-a", &["docs: readme", "feat: x"])]);
        let feat = out.find("## 🆕 feat").unwrap();
        let docs = out.find("## 📖 docs").unwrap();
        assert!(feat < docs);
    }

    #[test]
    fn other_section_is_last() {
        let out = render(vec![item("pkg-a", &["did some stuff", "style: lint"])]);
        assert_eq!(
            out,
            "## 💄 style \n- **pkg-a**: lint\n## 🔖 other \n- **pkg-a**: did some stuff\n"
        );
    }

    #[test]
    fn empty_group_renders_nothing() {
        assert_eq!(render(vec![]), "");
        assert_eq!(render(vec![item("pkg-a", &[])]), "");
    }
}
