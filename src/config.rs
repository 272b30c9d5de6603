use std::path::PathBuf;

use serde::Deserialize;

use crate::fmt::ChangelogFormat;

#[derive(Debug, Clone, Deserialize)]
pub struct RawCfg {
    pub rollup: RawRollupCfg,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RawRollupCfg {
    pub manifest: Option<PathBuf>,
    pub version: Option<String>,
    pub tag: Option<String>,
    pub blacklist: Vec<String>,
    pub changelog_file: Option<String>,
    pub outfile: Option<String>,
    pub output_format: ChangelogFormat,
}
