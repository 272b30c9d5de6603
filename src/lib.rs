//! Rolls the per-package changelogs of a monorepo up into a single release
//! summary.
//!
//! Publishable packages are located through the monorepo manifest, the
//! requested (or latest) version is picked from each package's
//! `CHANGELOG.json`, and every comment is classified against the conventional
//! commit grammar before being grouped into one section per commit type.
//!
//! ```no_run
//! # use changelog_rollup::Rollup;
//! let summary = Rollup::with_manifest("rush.json")
//!     .version("1.2.0")
//!     .blacklist(["internal-tools"])
//!     .render()
//!     .unwrap();
//! ```

#[macro_use]
mod macros;
pub mod changelog;
mod classify;
mod config;
mod entry;
pub mod error;
pub mod fmt;
pub mod locator;
mod rollup;
pub mod store;
#[cfg(test)]
mod testlog;
mod typegroup;

pub use classify::Classifier;
pub use entry::{ClassifiedEntry, CommitType};
pub use rollup::Rollup;
pub use typegroup::TypeGroup;

// The default config file
const DEFAULT_CONFIG_FILE: &str = ".rollup.toml";
