//! # File Sorter
//!
//! Tidies a folder tree by file type. Every file below the root is moved to
//! `<root>/<category>/<EXT>/<normalized name>`; files with an unknown or no
//! extension go to `<root>/MY_OTHER/`. Archives are unpacked into
//! `<root>/archives/<EXT>/<normalized stem>/` and deleted only when the
//! extraction worked.
//!
//! The sorter is best effort: a file that cannot be moved is logged and
//! skipped. Each call builds its own [`Scan`], so repeated runs in one
//! process never see each other's files.

use crate::error::{AssistantError, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod archive;
pub mod normalize;

use archive::ArchiveKind;
pub use normalize::normalize;

const OTHER_FOLDER: &str = "MY_OTHER";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Images,
    Video,
    Documents,
    Audio,
    Archives,
}

impl Category {
    pub fn folder(self) -> &'static str {
        match self {
            Category::Images => "images",
            Category::Video => "video",
            Category::Documents => "documents",
            Category::Audio => "audio",
            Category::Archives => "archives",
        }
    }

    /// Category for an upper-case extension without the dot.
    pub fn for_extension(ext: &str) -> Option<Self> {
        match ext {
            "JPEG" | "PNG" | "JPG" | "SVG" => Some(Category::Images),
            "AVI" | "MP4" | "MOV" | "MKV" => Some(Category::Video),
            "DOC" | "DOCX" | "TXT" | "PDF" | "XLSX" | "PPTX" => Some(Category::Documents),
            "MP3" | "OGG" | "WAV" | "AMR" => Some(Category::Audio),
            "ZIP" | "GZ" | "TAR" => Some(Category::Archives),
            _ => None,
        }
    }

    fn all() -> [Category; 5] {
        [
            Category::Images,
            Category::Video,
            Category::Documents,
            Category::Audio,
            Category::Archives,
        ]
    }
}

/// Folders the sorter owns; they are never descended into.
fn is_output_folder(name: &str) -> bool {
    name == OTHER_FOLDER || Category::all().iter().any(|c| c.folder() == name)
}

/// Upper-cased extension of a file name, or `None` when it has none.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| e.to_string_lossy().to_uppercase())
        .filter(|e| !e.is_empty())
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SortReport {
    pub moved: usize,
    pub extracted: usize,
    pub failed_archives: usize,
    pub skipped: usize,
    pub known_extensions: BTreeSet<String>,
    pub unknown_extensions: BTreeSet<String>,
}

#[derive(Debug)]
enum Target {
    Known(Category, String),
    Other,
}

/// Everything found during one walk of the tree.
#[derive(Debug, Default)]
struct Scan {
    files: Vec<(PathBuf, Target)>,
    folders: Vec<PathBuf>,
    known: BTreeSet<String>,
    unknown: BTreeSet<String>,
}

impl Scan {
    fn walk(&mut self, folder: &Path) -> std::io::Result<()> {
        for entry in fs::read_dir(folder)? {
            let path = entry?.path();
            if path.is_dir() {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                if is_output_folder(&name) {
                    continue;
                }
                self.folders.push(path.clone());
                if let Err(e) = self.walk(&path) {
                    warn!(folder = %path.display(), error = %e, "cannot read folder, skipping");
                }
                continue;
            }

            let target = match extension_of(&path) {
                None => Target::Other,
                Some(ext) => match Category::for_extension(&ext) {
                    Some(category) => {
                        self.known.insert(ext.clone());
                        Target::Known(category, ext)
                    }
                    None => {
                        self.unknown.insert(ext);
                        Target::Other
                    }
                },
            };
            self.files.push((path, target));
        }
        Ok(())
    }
}

/// Sorts every file under `root`. Fails only if `root` is not a readable
/// directory.
pub fn organize(root: &Path) -> Result<SortReport> {
    if !root.is_dir() {
        return Err(AssistantError::Sort(format!(
            "'{}' is not a directory",
            root.display()
        )));
    }

    let mut scan = Scan::default();
    scan.walk(root).map_err(AssistantError::Io)?;
    debug!(root = %root.display(), files = scan.files.len(), "scanned folder");

    let mut report = SortReport {
        known_extensions: std::mem::take(&mut scan.known),
        unknown_extensions: std::mem::take(&mut scan.unknown),
        ..SortReport::default()
    };

    for (file, target) in &scan.files {
        match target {
            Target::Known(Category::Archives, ext) => {
                let dir = root.join(Category::Archives.folder()).join(ext);
                if unpack_archive(file, &dir, ext) {
                    report.extracted += 1;
                } else {
                    report.failed_archives += 1;
                }
            }
            Target::Known(category, ext) => {
                let dir = root.join(category.folder()).join(ext);
                record_move(&mut report, file, &dir);
            }
            Target::Other => {
                let dir = root.join(OTHER_FOLDER);
                record_move(&mut report, file, &dir);
            }
        }
    }

    // Deepest folders come last in walk order.
    for folder in scan.folders.iter().rev() {
        if fs::remove_dir(folder).is_ok() {
            debug!(folder = %folder.display(), "removed empty folder");
        }
    }

    Ok(report)
}

fn record_move(report: &mut SortReport, file: &Path, dir: &Path) {
    match move_into(file, dir) {
        Ok(_) => report.moved += 1,
        Err(e) => {
            warn!(file = %file.display(), error = %e, "cannot move file, skipping");
            report.skipped += 1;
        }
    }
}

fn move_into(file: &Path, dir: &Path) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dest = dir.join(normalize(&name));
    if dest.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("'{}' already exists", dest.display()),
        ));
    }
    fs::rename(file, &dest)?;
    Ok(dest)
}

/// Extracts `file` into its own folder under `dir`. On failure the archive
/// stays where it was.
fn unpack_archive(file: &Path, dir: &Path, ext: &str) -> bool {
    let Some(kind) = ArchiveKind::from_extension(ext) else {
        return false;
    };
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dest = dir.join(normalize(&stem));
    let created = !dest.exists();

    let outcome = fs::create_dir_all(&dest).and_then(|_| archive::extract(kind, file, &dest));
    match outcome {
        Ok(()) => {
            if let Err(e) = fs::remove_file(file) {
                warn!(file = %file.display(), error = %e, "extracted but cannot delete archive");
            }
            true
        }
        Err(e) => {
            warn!(
                file = %file.display(),
                error = %e,
                "cannot extract archive, leaving it in place"
            );
            if created {
                let _ = fs::remove_dir_all(&dest);
            }
            false
        }
    }
}
