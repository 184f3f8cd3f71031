//! # Catalog sources
//!
//! The catalog is read-only for the lifetime of the process, so the storage
//! abstraction is a single load: a [`CatalogSource`] produces the wire
//! document once, and [`crate::catalog::Catalog`] owns everything after that.
//!
//! ## Implementations
//!
//! - [`bundled::BundledSource`]: the data source compiled into the binary.
//!   This is what ships; the catalog works with no files on disk.
//! - [`fs::FileSource`]: a JSON document on disk, for pointing the browser
//!   at a different component set (`--catalog`).
//!
//! A malformed document is a fatal load error. There is no partial-catalog
//! recovery; every operation depends on the full record set.

use crate::error::Result;
use crate::model::CatalogDoc;

pub mod bundled;
pub mod fs;

/// Produces the catalog document. Implementations are expected to be cheap
/// to call but are only called once per process.
pub trait CatalogSource {
    fn load(&self) -> Result<CatalogDoc>;
}
