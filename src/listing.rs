use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use glob::glob;
use log::{debug, warn};
use rayon::prelude::*;

use crate::{name::Renamed, plan_renames, rename_error::RenameError};

/// Outcome of renaming one listing.
pub struct ListingResult {
    pub path: PathBuf,
    pub renamed: Result<Vec<Renamed>, RenameError>,
}

pub fn stdin_path() -> PathBuf {
    PathBuf::from("-")
}

pub fn rename_listing(path: &PathBuf) -> Result<Vec<Renamed>, RenameError> {
    debug!("reading listing {}", path.display());
    let input = fs::read_to_string(path).map_err(|e| RenameError::io(path, e))?;
    plan_renames(&input)
}

pub fn rename_stdin() -> Result<Vec<Renamed>, RenameError> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input).map_err(|e| RenameError::io(&stdin_path(), e))?;
    plan_renames(&input)
}

/// Listing files matching `pattern`, sorted by path.
pub fn get_listing_file_list(pattern: &str) -> Result<Vec<PathBuf>, RenameError> {
    let paths = glob(pattern).map_err(|e| RenameError::Pattern {
        pattern: pattern.to_string(),
        details: e.to_string(),
    })?;
    let mut files: Vec<PathBuf> = paths
        .filter_map(|p| p.map_err(|e| warn!("skipping unreadable path: {}", e)).ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Rename each listing matching `pattern` independently, in parallel.
/// A bad listing does not stop the others.
pub fn rename_matching(pattern: &str) -> Result<Vec<ListingResult>, RenameError> {
    let files = get_listing_file_list(pattern)?;
    debug!("{} listings match {}", files.len(), pattern);
    Ok(files
        .into_par_iter()
        .map(|path| {
            let renamed = rename_listing(&path);
            if let Err(e) = &renamed {
                warn!("{}", e);
            }
            ListingResult { path, renamed }
        })
        .collect())
}
