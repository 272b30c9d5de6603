use indexmap::{IndexMap, IndexSet};
use log::debug;

use crate::{
    changelog::LogItem,
    classify::{trim_comment, Classifier},
    entry::{ClassifiedEntry, CommitType},
};

/// Classified entries grouped by type tag, in the order they were added
#[derive(Debug, Clone, Default)]
pub struct TypeGroup {
    pub sections: IndexMap<CommitType, Vec<ClassifiedEntry>>,
}

impl TypeGroup {
    /// Classifies every comment of every log item and groups the results by
    /// type.
    ///
    /// Repeated comments within one package collapse to their first
    /// occurrence; the same comment in two different packages is kept for
    /// both. Comments that are empty once trimmed are dropped.
    ///
    /// # Example
    ///
    /// ```
    /// # use changelog_rollup::{changelog::LogItem, Classifier, CommitType, TypeGroup};
    /// let items = vec![LogItem {
    ///     package: "pkg-a".into(),
    ///     comments: vec!["feat: add X".into(), "feat: add X".into()],
    /// }];
    /// let tg = TypeGroup::from_log_items(items, &Classifier::new());
    ///
    /// assert_eq!(1, tg.sections[&CommitType::Feat].len());
    /// ```
    pub fn from_log_items<I>(items: I, classifier: &Classifier) -> TypeGroup
    where
        I: IntoIterator<Item = LogItem>,
    {
        items.into_iter().fold(TypeGroup::default(), |mut tg, item| {
            tg.add_log_item(&item, classifier);
            tg
        })
    }

    fn add_log_item(&mut self, item: &LogItem, classifier: &Classifier) {
        let mut seen = IndexSet::new();
        for raw in &item.comments {
            let comment = trim_comment(raw);
            if comment.is_empty() {
                continue;
            }
            if !seen.insert(comment) {
                debug!("{}: skipping duplicate comment {:?}", item.package, comment);
                continue;
            }
            let entry = classifier.classify(comment, &item.package);
            self.sections
                .entry(entry.commit_type)
                .or_insert_with(Vec::new)
                .push(entry);
        }
    }

    /// Non-empty sections in rendering order
    pub fn ordered(&self) -> impl Iterator<Item = (CommitType, &[ClassifiedEntry])> {
        CommitType::PRIORITY.into_iter().filter_map(|t| {
            self.sections
                .get(&t)
                .filter(|v| !v.is_empty())
                .map(|v| (t, &v[..]))
        })
    }

    pub fn is_empty(&self) -> bool { self.sections.values().all(Vec::is_empty) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(package: &str, comments: &[&str]) -> LogItem {
        LogItem {
            package: package.into(),
            comments: comments.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn group(items: Vec<LogItem>) -> TypeGroup {
        TypeGroup::from_log_items(items, &Classifier::new())
    }

    #[test]
    fn duplicates_collapse_within_a_package() {
        let tg = group(vec![item("pkg-a", &["feat: add X", "  feat: add X\n", "feat: add Y"])]);
        let feats = &tg.sections[&CommitType::Feat];
        assert_eq!(feats.len(), 2);
        assert_eq!(feats[0].subject, "add X");
        assert_eq!(feats[1].subject, "add Y");
    }

    #[test]
    fn duplicates_survive_across_packages() {
        let tg = group(vec![
            item("pkg-a", &["fix: shared"]),
            item("pkg-b", &["fix: shared"]),
        ]);
        let fixes = &tg.sections[&CommitType::Fix];
        assert_eq!(fixes.len(), 2);
        assert_eq!(fixes[0].scope, "pkg-a");
        assert_eq!(fixes[1].scope, "pkg-b");
    }

    #[test]
    fn byte_order_mark_does_not_defeat_dedup() {
        let tg = group(vec![item("pkg-a", &["\u{feff}fix: once", "fix: once"])]);
        assert_eq!(tg.sections[&CommitType::Fix].len(), 1);
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let tg = group(vec![item("pkg-a", &["fix: Typo", "fix: typo"])]);
        assert_eq!(tg.sections[&CommitType::Fix].len(), 2);
    }

    #[test]
    fn blank_comments_are_dropped() {
        let tg = group(vec![item("pkg-a", &["   ", "\n", ""])]);
        assert!(tg.is_empty());
        assert_eq!(tg.ordered().count(), 0);
    }

    #[test]
    fn insertion_order_is_kept_within_a_type() {
        let tg = group(vec![
            item("pkg-b", &["chore: b1", "chore: b2"]),
            item("pkg-a", &["chore: a1"]),
        ]);
        let subjects: Vec<_> = tg.sections[&CommitType::Chore]
            .iter()
            .map(|e| e.subject.as_str())
            .collect();
        assert_eq!(subjects, ["b1", "b2", "a1"]);
    }

    #[test]
    fn ordered_follows_priority() {
        let tg = group(vec![item("pkg-a", &["docs: readme", "whatever", "feat: x"])]);
        let types: Vec<_> = tg.ordered().map(|(t, _)| t).collect();
        assert_eq!(types, [CommitType::Feat, CommitType::Docs, CommitType::Other]);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(group(vec![]).is_empty());
        assert!(group(vec![item("pkg-a", &[])]).is_empty());
    }
}
