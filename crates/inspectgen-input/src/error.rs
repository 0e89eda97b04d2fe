//! Input errors. Every variant is fatal to a generation run.

use inspectgen_core::DescriptorError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to open archive {}", .path.display())]
    OpenArchive {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read archive {}", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("{entry} not found in {}", .archive.display())]
    MissingEntry { archive: PathBuf, entry: String },

    #[error("failed to read {entry} from {}", .archive.display())]
    ReadEntry {
        archive: PathBuf,
        entry: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin} is not valid UTF-8 XML")]
    Encoding {
        origin: String,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("malformed inspection manifest {origin}")]
    Xml {
        origin: String,
        #[source]
        source: roxmltree::Error,
    },

    #[error("invalid inspection declaration in {origin}")]
    Descriptor {
        origin: String,
        #[source]
        source: DescriptorError,
    },
}
