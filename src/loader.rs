use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use error_chain::bail;
use log::{debug, info};

use crate::errors::*;
use crate::layout::Layout;
use crate::maze::SerializedMaze;
use crate::parser::parse;
use crate::validation::validate;

/// Directory, relative to the crate root, holding the bundled mazes.
pub const DEFAULT_RESOURCE_DIR: &str = "mazes";

/// Environment variable that overrides where bundled mazes are read from.
pub const RESOURCE_DIR_ENV_VAR: &str = "MAZES_RESOURCE_DIR";

/// The bundled mazes, in the order they are presented.
pub const BUNDLED_MAZES: [&str; 4] = ["first_steps.json", "slippery.json", "crossroads.json", "labyrinth.json"];

/// Somewhere maze documents can be fetched from by name.
pub trait MazeSource {
    fn fetch(&self, name: &str) -> Result<String>;
}

/// Reads maze documents from files in one directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(root: P) -> DirectorySource {
        DirectorySource { root: root.as_ref().to_path_buf() }
    }

    /// `$MAZES_RESOURCE_DIR` if it is set, otherwise the `mazes` directory of this crate.
    pub fn from_env() -> DirectorySource {
        let root = if let Ok(dir) = env::var(RESOURCE_DIR_ENV_VAR) {
            PathBuf::from(dir)
        } else {
            Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_RESOURCE_DIR)
        };
        DirectorySource::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl MazeSource for DirectorySource {
    fn fetch(&self, name: &str) -> Result<String> {
        let path = self.root.join(name);
        fs::read_to_string(&path)
            .chain_err(|| ErrorKind::ResourceMissing(path.display().to_string()))
    }
}

/// Fetch, validate and parse one maze after another, stopping at the first failure.
///
/// Bundled content is expected to be correct, so a missing or invalid maze is an error for the caller to
/// surface rather than something to skip.
pub fn load_named<S: MazeSource, N: AsRef<str>>(source: &S, names: &[N]) -> Result<Vec<Layout>> {

    let mut layouts = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        debug!("Fetching maze {}", name);

        let body = source.fetch(name)?;
        let maze = SerializedMaze::from_json(&body)
            .chain_err(|| format!("bundled maze '{}' is not a maze document", name))?;

        let report = validate(&maze);
        if !report.ok {
            bail!(ErrorKind::InvalidBundledMaze(name.to_string(), report.errors));
        }
        layouts.push(parse(&maze));
    }

    info!("Loaded {} mazes", layouts.len());
    Ok(layouts)
}

/// Load every bundled maze in order.
pub fn load_all<S: MazeSource>(source: &S) -> Result<Vec<Layout>> {
    load_named(source, &BUNDLED_MAZES)
}
