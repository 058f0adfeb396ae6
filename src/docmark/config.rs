//! Configuration
//!
//!     Settings are layered, later layers winning:
//!
//!         defaults/docmark.default.toml    embedded, so documented defaults and runtime agree
//!         project files                    Loader::with_file / Loader::with_optional_file
//!         key overrides                    Loader::set_override
//!         table flags                      Loader::with_table (`--symbols`, `--glossary`, ...)
//!
//!     A relative table path found in a project file is taken relative to the directory of
//!     the last project file that was actually present, so `docmark.toml` can sit next to its
//!     `data/` directory and be used from anywhere. Paths passed to [`Loader::with_table`] are
//!     kept as given.

use crate::docmark::inlines::LinkSettings;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../../defaults/docmark.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DocmarkConfig {
    pub compiler: CompilerConfig,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompilerConfig {
    pub highlight_language: String,
    pub glossary_base_url: String,
    pub basis_base_url: String,
}

impl CompilerConfig {
    /// Base urls for reference links. A trailing `/` is dropped, since fragments are
    /// appended as `{base}#{anchor}`.
    pub fn link_settings(&self) -> LinkSettings {
        LinkSettings {
            glossary_base_url: trim_base(&self.glossary_base_url),
            basis_base_url: trim_base(&self.basis_base_url),
        }
    }
}

fn trim_base(url: &str) -> String {
    match url.trim_end_matches('/') {
        "" => url.to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// One of the three lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Symbols,
    Glossary,
    Basis,
}

impl Table {
    pub const ALL: [Table; 3] = [Table::Symbols, Table::Glossary, Table::Basis];

    /// Key under `[knowledge]`, also the name of the CLI flag.
    pub fn key(self) -> &'static str {
        match self {
            Table::Symbols => "symbols",
            Table::Glossary => "glossary",
            Table::Basis => "basis",
        }
    }
}

/// Where the lookup tables live.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KnowledgeConfig {
    pub symbols: Option<PathBuf>,
    pub glossary: Option<PathBuf>,
    pub basis: Option<PathBuf>,
}

impl KnowledgeConfig {
    pub fn path(&self, table: Table) -> Option<&Path> {
        match table {
            Table::Symbols => self.symbols.as_deref(),
            Table::Glossary => self.glossary.as_deref(),
            Table::Basis => self.basis.as_deref(),
        }
    }

    fn slot(&mut self, table: Table) -> &mut Option<PathBuf> {
        match table {
            Table::Symbols => &mut self.symbols,
            Table::Glossary => &mut self.glossary,
            Table::Basis => &mut self.basis,
        }
    }

    fn rebase(&mut self, dir: &Path) {
        for table in Table::ALL {
            if let Some(path) = self.slot(table) {
                if path.is_relative() {
                    *path = dir.join(&*path);
                }
            }
        }
    }
}

/// Layers project files, overrides and table flags over the embedded defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
    project_dir: Option<PathBuf>,
    tables: Vec<(Table, PathBuf)>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self {
            builder,
            project_dir: None,
            tables: Vec::new(),
        }
    }

    /// Layer a project file. A missing file fails [`Loader::build`].
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        self.project_dir = path.parent().map(Path::to_path_buf);
        self
    }

    /// Layer a project file if it exists.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.is_file() {
            return self;
        }
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(false));
        self.project_dir = path.parent().map(Path::to_path_buf);
        self
    }

    /// Set one dotted key, e.g. `compiler.highlight_language`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Point `table` at `path`, ahead of anything the files say.
    pub fn with_table(mut self, table: Table, path: impl Into<PathBuf>) -> Self {
        self.tables.push((table, path.into()));
        self
    }

    pub fn build(self) -> Result<DocmarkConfig, ConfigError> {
        let mut config: DocmarkConfig = self.builder.build()?.try_deserialize()?;
        if let Some(dir) = &self.project_dir {
            config.knowledge.rebase(dir);
        }
        for (table, path) in self.tables {
            *config.knowledge.slot(table) = Some(path);
        }
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<DocmarkConfig, ConfigError> {
    Loader::new().build()
}
