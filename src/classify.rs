use regex::Regex;

use crate::entry::{ClassifiedEntry, CommitType};

/// Parses comments against the conventional commit grammar
/// `type(scope)!: subject`.
#[derive(Debug, Clone)]
pub struct Classifier {
    regex: Regex,
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier {
            regex: regex!(
                r"(?i)^(feat|fix|docs|style|refactor|perf|test|chore|revert)(\((.+)\))?(!)?: (.+)$"
            ),
        }
    }
}

/// Strips surrounding whitespace, including the byte order mark that
/// `str::trim` leaves in place.
pub(crate) fn trim_comment(comment: &str) -> &str {
    comment.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

impl Classifier {
    pub fn new() -> Self { Classifier::default() }

    /// Classifies a single comment owned by `package`. The comment is trimmed
    /// first; anything that doesn't match the grammar becomes
    /// `CommitType::Other` with the whole comment as its subject.
    ///
    /// # Example
    ///
    /// ```
    /// # use changelog_rollup::{Classifier, CommitType};
    /// let entry = Classifier::new().classify("feat(core)!: change API", "pkg-a");
    ///
    /// assert_eq!(CommitType::Feat, entry.commit_type);
    /// assert_eq!("core", entry.scope);
    /// assert!(entry.breaking);
    /// assert_eq!("change API", entry.subject);
    /// ```
    pub fn classify(&self, comment: &str, package: &str) -> ClassifiedEntry {
        let comment = trim_comment(comment);
        let parsed = self.regex.captures(comment).and_then(|caps| {
            let commit_type = caps.get(1)?.as_str().parse::<CommitType>().ok()?;
            Some(ClassifiedEntry {
                commit_type,
                scope: caps
                    .get(3)
                    .map_or_else(|| package.to_owned(), |m| m.as_str().to_owned()),
                breaking: caps.get(4).is_some(),
                subject: caps.get(5)?.as_str().to_owned(),
            })
        });

        parsed.unwrap_or_else(|| ClassifiedEntry {
            commit_type: CommitType::Other,
            scope: package.to_owned(),
            breaking: false,
            subject: comment.to_owned(),
        })
    }
}
