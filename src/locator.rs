use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

use crate::{error::Result, store::DocumentStore};

/// The changelog file name used when none is configured
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.json";

/// Where one package's changelog lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLocation {
    pub package: String,
    pub changelog: PathBuf,
}

/// Narrows down which packages take part in a rollup
#[derive(Debug, Clone, Default)]
pub struct PackageFilter {
    /// Only packages carrying this tag
    pub tag: Option<String>,
    /// Package names to leave out
    pub blacklist: Vec<String>,
}

impl PackageFilter {
    fn accepts(&self, project: &Project) -> bool {
        if !project.publishable() {
            debug!("{} is not published, skipping", project.package_name);
            return false;
        }
        if let Some(ref tag) = self.tag {
            if !project.tags.iter().any(|t| t == tag) {
                debug!("{} is not tagged {}, skipping", project.package_name, tag);
                return false;
            }
        }
        if self.blacklist.iter().any(|b| *b == project.package_name) {
            debug!("{} is blacklisted, skipping", project.package_name);
            return false;
        }
        true
    }
}

/// Resolves the changelogs to roll up
pub trait PackageLocator {
    fn locate<S: DocumentStore>(
        &self,
        store: &S,
        filter: &PackageFilter,
    ) -> Result<Vec<PackageLocation>>;
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Manifest {
    projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Project {
    package_name: String,
    project_folder: PathBuf,
    should_publish: bool,
    version_policy_name: Option<String>,
    tags: Vec<String>,
}

impl Project {
    fn publishable(&self) -> bool { self.should_publish || self.version_policy_name.is_some() }
}

/// Locates packages through a monorepo manifest (`rush.json`). Changelogs are
/// expected at `<manifest dir>/<project folder>/<changelog file>`.
#[derive(Debug, Clone)]
pub struct ManifestLocator {
    pub manifest: PathBuf,
    pub changelog_file: String,
}

impl ManifestLocator {
    pub fn new<P: AsRef<Path>>(manifest: P) -> Self {
        ManifestLocator {
            manifest: manifest.as_ref().to_path_buf(),
            changelog_file: DEFAULT_CHANGELOG_FILE.to_owned(),
        }
    }

    pub fn changelog_file<S: Into<String>>(mut self, f: S) -> Self {
        self.changelog_file = f.into();
        self
    }
}

impl PackageLocator for ManifestLocator {
    fn locate<S: DocumentStore>(
        &self,
        store: &S,
        filter: &PackageFilter,
    ) -> Result<Vec<PackageLocation>> {
        debug!("Reading manifest: {:?}", self.manifest);
        let manifest: Manifest = store.load(&self.manifest)?;
        let root = self.manifest.parent().unwrap_or_else(|| Path::new(""));

        Ok(manifest
            .projects
            .into_iter()
            .filter(|p| filter.accepts(p))
            .map(|p| {
                info!("Found package {}", p.package_name);
                PackageLocation {
                    changelog: root.join(&p.project_folder).join(&self.changelog_file),
                    package: p.package_name,
                }
            })
            .collect())
    }
}
