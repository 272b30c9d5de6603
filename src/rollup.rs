use std::{
    env, fs,
    io::{self, stdout, BufWriter},
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    changelog::{ChangelogDocument, LogItem},
    classify::Classifier,
    config::RawCfg,
    error::{Error, Result},
    fmt::{ChangelogFormat, FormatWriter, JsonWriter, MarkdownWriter},
    locator::{ManifestLocator, PackageFilter, PackageLocator, DEFAULT_CHANGELOG_FILE},
    store::{DocumentStore, FsStore},
    typegroup::TypeGroup,
    DEFAULT_CONFIG_FILE,
};

/// The base struct used to set options and produce release summaries.
#[derive(Debug, Clone)]
pub struct Rollup {
    /// The monorepo manifest listing every project (Defaults to `rush.json`)
    pub manifest: PathBuf,
    /// The version to summarize. When `None` the most recent entry of each
    /// package's changelog is used
    pub version: Option<String>,
    /// Only include packages carrying this tag
    pub tag: Option<String>,
    /// Package names to leave out of the summary
    pub blacklist: Vec<String>,
    /// The changelog file name inside each project folder (Defaults to
    /// `CHANGELOG.json`)
    pub changelog_file: String,
    /// The file to write the summary to (Defaults to `stdout`)
    pub outfile: Option<String>,
    /// The format to output the summary in (Defaults to Markdown)
    pub out_format: ChangelogFormat,
    /// Classifies comments against the commit grammar
    pub classifier: Classifier,
}

impl Default for Rollup {
    fn default() -> Self {
        debug!("Creating default rollup with Rollup::default()");
        Rollup {
            manifest: PathBuf::from("rush.json"),
            version: None,
            tag: None,
            blacklist: vec![],
            changelog_file: DEFAULT_CHANGELOG_FILE.to_owned(),
            outfile: None,
            out_format: ChangelogFormat::Markdown,
            classifier: Classifier::default(),
        }
    }
}

impl Rollup {
    /// Creates a `Rollup` from the default `.rollup.toml` configuration file
    /// in the current working directory.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use changelog_rollup::Rollup;
    /// let rollup = Rollup::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        debug!("Trying default config file");
        Rollup::from_file(DEFAULT_CONFIG_FILE)
    }

    /// Creates a `Rollup` without a configuration file, reading the given
    /// manifest.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use changelog_rollup::Rollup;
    /// let rollup = Rollup::with_manifest("/myrepo/rush.json");
    /// ```
    pub fn with_manifest<P: AsRef<Path>>(manifest: P) -> Self {
        Rollup {
            manifest: manifest.as_ref().to_path_buf(),
            ..Rollup::default()
        }
    }

    /// Creates a `Rollup` from a TOML configuration file. A relative
    /// `manifest` in the file is resolved against the file's directory.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use changelog_rollup::Rollup;
    /// let rollup = Rollup::from_file("/myrepo/.rollup.toml").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        debug!("Creating rollup with \n\tfile: {:?}", file.as_ref());
        let cfg_file = if file.as_ref().is_relative() {
            let cwd = env::current_dir().map_err(|_| Error::CurrentDir)?;
            cwd.join(file.as_ref())
        } else {
            file.as_ref().to_path_buf()
        };

        let mut dir = cfg_file.clone();
        dir.pop();
        Rollup::with_manifest(dir.join("rush.json")).try_config_file(&cfg_file)
    }

    fn try_config_file(mut self, cfg_file: &Path) -> Result<Self> {
        debug!("Trying to use config file: {:?}", cfg_file);
        let toml_s = fs::read_to_string(cfg_file)?;
        let cfg: RawCfg =
            toml::from_str(&toml_s).map_err(|e| Error::ConfigParse(cfg_file.to_path_buf(), e))?;
        let cfg = cfg.rollup;

        if let Some(manifest) = cfg.manifest {
            let dir = cfg_file.parent().unwrap_or_else(|| Path::new(""));
            self.manifest = dir.join(manifest);
        }
        if let Some(cl) = cfg.changelog_file {
            self.changelog_file = cl;
        }
        self.version = cfg.version;
        self.tag = cfg.tag;
        self.blacklist = cfg.blacklist;
        self.outfile = cfg.outfile;
        self.out_format = cfg.output_format;

        debug!("Returning rollup:\n{:?}", self);
        Ok(self)
    }

    /// Sets the monorepo manifest to read projects from
    pub fn manifest<P: AsRef<Path>>(mut self, p: P) -> Rollup {
        self.manifest = p.as_ref().to_path_buf();
        self
    }

    /// Sets the version to summarize
    ///
    /// **NOTE:** Anything set here will override anything in a configuration
    /// TOML file
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use changelog_rollup::Rollup;
    /// let rollup = Rollup::new().unwrap().version("1.4.0");
    /// ```
    pub fn version<S: Into<String>>(mut self, v: S) -> Rollup {
        self.version = Some(v.into());
        self
    }

    /// Only include packages carrying the given tag
    pub fn tag<S: Into<String>>(mut self, t: S) -> Rollup {
        self.tag = Some(t.into());
        self
    }

    /// Sets the package names to leave out
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use changelog_rollup::Rollup;
    /// let rollup = Rollup::new()
    ///     .unwrap()
    ///     .blacklist(["internal-tools", "test-utils"]);
    /// ```
    pub fn blacklist<I, S>(mut self, names: I) -> Rollup
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blacklist = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the changelog file name looked up in each project folder
    pub fn changelog_file<S: Into<String>>(mut self, f: S) -> Rollup {
        self.changelog_file = f.into();
        self
    }

    /// Sets the summary output file (Defaults to `stdout` if omitted)
    pub fn outfile<S: Into<String>>(mut self, f: S) -> Rollup {
        self.outfile = Some(f.into());
        self
    }

    /// The format of output for the summary (Defaults to Markdown)
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use changelog_rollup::{fmt::ChangelogFormat, Rollup};
    /// let rollup = Rollup::new().unwrap().output_format(ChangelogFormat::Json);
    /// ```
    pub fn output_format(mut self, f: ChangelogFormat) -> Rollup {
        self.out_format = f;
        self
    }

    /// The package filter built from `tag` and `blacklist`
    pub fn filter(&self) -> PackageFilter {
        PackageFilter {
            tag: self.tag.clone(),
            blacklist: self.blacklist.clone(),
        }
    }

    /// The locator reading `manifest`
    pub fn locator(&self) -> ManifestLocator {
        ManifestLocator::new(&self.manifest).changelog_file(&*self.changelog_file)
    }

    /// Retrieves the selected version's comments of every located package
    /// from disk.
    pub fn log_items(&self) -> Result<Vec<LogItem>> {
        self.log_items_with(&self.locator(), &FsStore)
    }

    /// Retrieves the selected version's comments of every package `locator`
    /// finds, reading documents from `store`.
    ///
    /// Only a failure to locate packages is an error. A changelog that is
    /// missing, doesn't parse, has no entries, or lacks the requested version
    /// is logged and contributes nothing.
    pub fn log_items_with<L, S>(&self, locator: &L, store: &S) -> Result<Vec<LogItem>>
    where
        L: PackageLocator,
        S: DocumentStore,
    {
        let locations = locator.locate(store, &self.filter())?;

        Ok(locations
            .iter()
            .filter_map(|loc| {
                let doc: ChangelogDocument = match store.load(&loc.changelog) {
                    Ok(doc) => doc,
                    Err(Error::NotFound(path)) => {
                        info!("{}: no changelog at {:?}, skipping", loc.package, path);
                        return None;
                    }
                    Err(e) => {
                        info!("{}: unreadable changelog, skipping: {}", loc.package, e);
                        return None;
                    }
                };
                doc.log_item(self.version.as_deref())
            })
            .collect())
    }

    /// Classifies every located package's comments into a `TypeGroup`
    pub fn type_group(&self) -> Result<TypeGroup> {
        Ok(TypeGroup::from_log_items(self.log_items()?, &self.classifier))
    }

    /// Same as `type_group` with a custom locator and document store
    pub fn type_group_with<L, S>(&self, locator: &L, store: &S) -> Result<TypeGroup>
    where
        L: PackageLocator,
        S: DocumentStore,
    {
        Ok(TypeGroup::from_log_items(
            self.log_items_with(locator, store)?,
            &self.classifier,
        ))
    }

    /// Renders the summary in the configured output format. An empty string
    /// (or `[]` for JSON) means nothing qualified.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use changelog_rollup::Rollup;
    /// let summary = Rollup::with_manifest("rush.json").render().unwrap();
    /// println!("{summary}");
    /// ```
    pub fn render(&self) -> Result<String> { self.render_group(&self.type_group()?) }

    /// Renders an already built `TypeGroup` in the configured output format
    pub fn render_group(&self, group: &TypeGroup) -> Result<String> {
        let mut out = Vec::new();
        self.write_group(&mut out, group)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    fn write_group<W: io::Write>(&self, out: &mut W, group: &TypeGroup) -> Result<()> {
        match self.out_format {
            ChangelogFormat::Markdown => MarkdownWriter::new(out).write_summary(group),
            ChangelogFormat::Json => JsonWriter::new(out).write_summary(group),
        }
    }

    /// Writes the summary to `outfile`, or `stdout` when none is set.
    pub fn write_summary(&self) -> Result<()> {
        if let Some(ref f) = self.outfile {
            debug!("outfile set to: {:?}", f);
            self.write_summary_to(f)
        } else {
            debug!("outfile not set using stdout");
            let out = stdout();
            let mut out_buf = BufWriter::new(out.lock());
            self.write_group(&mut out_buf, &self.type_group()?)
        }
    }

    /// Writes the summary to a file, replacing its contents.
    pub fn write_summary_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        debug!("Writing summary to file: {:?}", path.as_ref());
        let group = self.type_group()?;
        let mut file = fs::File::create(path.as_ref())?;
        self.write_group(&mut file, &group)
    }

    /// Writes the summary with a specified `FormatWriter`
    pub fn write_summary_with<W>(&self, writer: &mut W) -> Result<()>
    where
        W: FormatWriter,
    {
        debug!("Writing summary from writer");
        writer.write_summary(&self.type_group()?)
    }
}
