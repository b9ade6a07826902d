use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};

use crate::format::Format;

/// Source files found under a root, along with entries which could not be
/// read.
#[derive(Default)]
pub(crate) struct Listing {
    pub(crate) files: Vec<PathBuf>,
    pub(crate) errors: Vec<ignore::Error>,
}

/// List source files under `root`.
///
/// Only the immediate children of `root` are considered unless `recursive`
/// is set. Hidden entries are skipped and ignore files are not consulted.
/// Symbolic links to files are listed, but linked directories are not
/// descended into. A `root` which is not a directory yields nothing.
///
/// The files are sorted by path.
pub(crate) fn enumerate(root: &Path, recursive: bool) -> Listing {
    let root = normalize(root);

    let mut walker = WalkBuilder::new(&root);
    walker.standard_filters(false).hidden(true);

    if !recursive {
        walker.max_depth(Some(1));
    }

    collect(walker.build())
}

fn collect<I>(entries: I) -> Listing
where
    I: IntoIterator<Item = Result<DirEntry, ignore::Error>>,
{
    let mut listing = Listing::default();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                listing.errors.push(e);
                continue;
            }
        };

        // The root itself is never a candidate.
        if entry.depth() == 0 {
            continue;
        }

        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };

        if Format::SOURCE.matches_ext(ext) {
            listing.files.push(path.to_path_buf());
        }
    }

    listing.files.sort();
    listing
}

/// Collapse repeated separators and `.` components.
fn normalize(path: &Path) -> PathBuf {
    path.components().collect()
}
