//! Input adapters for inspection generation.
//!
//! ```text
//! IDE home ──> ArchiveReader ──┬─> manifest::parse_descriptors ──> Vec<Descriptor>
//!  (*.jar)     (zip entries)   └─> properties::parse_properties ─> LocalizationIndex
//! ```
//!
//! [`SourceManifest`] lists which jar entries are read; its default matches
//! the layout of an IntelliJ IDEA Ultimate distribution.

pub mod archive;
pub mod error;
pub mod manifest;
pub mod properties;
pub mod sources;

pub use archive::{ArchiveReader, SourceEntry, ZipArchiveReader};
pub use error::InputError;
pub use manifest::parse_descriptors;
pub use properties::parse_properties;
pub use sources::{SourceManifest, load_descriptors, load_messages};
