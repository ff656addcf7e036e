use flate2::read::GzDecoder;
use std::fs::File;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Zip,
    Tar,
    /// Gzip-compressed tar
    Gzip,
}

impl ArchiveKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "ZIP" => Some(ArchiveKind::Zip),
            "TAR" => Some(ArchiveKind::Tar),
            "GZ" => Some(ArchiveKind::Gzip),
            _ => None,
        }
    }
}

/// Unpacks `archive` into `dest`, which must already exist.
pub fn extract(kind: ArchiveKind, archive: &Path, dest: &Path) -> io::Result<()> {
    let file = File::open(archive)?;
    match kind {
        ArchiveKind::Zip => {
            let mut zip = zip::ZipArchive::new(file)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            zip.extract(dest)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        }
        ArchiveKind::Tar => tar::Archive::new(file).unpack(dest),
        ArchiveKind::Gzip => tar::Archive::new(GzDecoder::new(file)).unpack(dest),
    }
}
