use log::{info, warn};
use serde::Deserialize;

/// One package's full change history, as stored in its `CHANGELOG.json`
#[derive(Debug, Clone, Deserialize)]
pub struct ChangelogDocument {
    /// The package name
    pub name: String,
    /// Version entries, newest first
    #[serde(default)]
    pub entries: Vec<VersionEntry>,
}

/// A single released (or pending) version of a package
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VersionEntry {
    pub version: String,
    pub tag: String,
    pub date: Option<String>,
    pub comments: Comments,
}

/// The comment buckets of a version entry, keyed by severity
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Comments {
    pub none: Vec<Comment>,
    pub patch: Vec<Comment>,
    pub minor: Vec<Comment>,
    pub major: Vec<Comment>,
}

/// A free-text change description
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub comment: String,
    pub author: Option<String>,
    pub commit: Option<String>,
}

/// The raw comments of one package's selected version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogItem {
    /// The owning package name
    pub package: String,
    /// Comments in `none, patch, minor, major` order, untrimmed
    pub comments: Vec<String>,
}

impl ChangelogDocument {
    /// Picks the entry for `version`, or the most recent entry when no version
    /// was requested.
    ///
    /// A requested version that is not present is logged along with the most
    /// recent version available and yields `None`.
    ///
    /// # Example
    ///
    /// ```
    /// # use changelog_rollup::changelog::ChangelogDocument;
    /// let doc: ChangelogDocument = serde_json::from_str(
    ///     r#"{"name":"pkg","entries":[{"version":"2.0.0"},{"version":"1.0.0"}]}"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!("2.0.0", doc.select(None).unwrap().version);
    /// assert_eq!("1.0.0", doc.select(Some("1.0.0")).unwrap().version);
    /// assert!(doc.select(Some("9.9.9")).is_none());
    /// ```
    pub fn select(&self, version: Option<&str>) -> Option<&VersionEntry> {
        let latest = match self.entries.first() {
            Some(e) => e,
            None => {
                info!("{} has no changelog entries, skipping", self.name);
                return None;
            }
        };

        let Some(wanted) = version else {
            return Some(latest);
        };

        let found = self.entries.iter().find(|e| e.version == wanted);
        if found.is_none() {
            warn!(
                "{}: version {} not found in changelog, latest is {}",
                self.name, wanted, latest.version
            );
        }
        found
    }

    /// Selects a version and flattens it into a `LogItem`
    pub fn log_item(&self, version: Option<&str>) -> Option<LogItem> {
        self.select(version).map(|e| e.log_item(&self.name))
    }
}

impl VersionEntry {
    /// Flattens the comment buckets into a `LogItem` owned by `package`
    pub fn log_item(&self, package: &str) -> LogItem {
        let c = &self.comments;
        LogItem {
            package: package.to_owned(),
            comments: c
                .none
                .iter()
                .chain(&c.patch)
                .chain(&c.minor)
                .chain(&c.major)
                .map(|item| item.comment.clone())
                .collect(),
        }
    }
}
