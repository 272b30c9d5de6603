use serde::Serialize;
use strum::{Display, EnumString};

/// The type tag of a classified comment
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, EnumString, Display, Serialize, PartialOrd, Ord,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Refactor,
    Perf,
    Test,
    Chore,
    Revert,
    Docs,
    Style,
    Other,
}

impl CommitType {
    /// Section order of the rendered summary
    pub const PRIORITY: [CommitType; 10] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Refactor,
        CommitType::Perf,
        CommitType::Test,
        CommitType::Chore,
        CommitType::Revert,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Other,
    ];

    /// The glyph shown in front of the section heading
    pub fn emoji(self) -> &'static str {
        match self {
            CommitType::Feat => "🆕",
            CommitType::Fix => "🐛",
            CommitType::Refactor => "🔨",
            CommitType::Perf => "⚡",
            CommitType::Test => "✅",
            CommitType::Chore => "🔧",
            CommitType::Revert => "🔙",
            CommitType::Docs => "📖",
            CommitType::Style => "💄",
            CommitType::Other => "🔖",
        }
    }
}

/// A comment after classification against the commit grammar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedEntry {
    #[serde(skip)]
    pub commit_type: CommitType,
    /// The explicit scope, or the owning package name
    pub scope: String,
    /// Set by a `!` after the type or scope
    pub breaking: bool,
    pub subject: String,
}
