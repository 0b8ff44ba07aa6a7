//! Model access backends.
//!
//! Turns raw document bytes into something the rest of the crate can use:
//!
//! - **Ecore XMI** ([`EcoreXmi`]) - semantic reader producing a typed
//!   [`Model`](crate::model::Model) for the extraction engine
//! - **id/idref scanner** ([`IdRefScanner`]) - structural, type-blind
//!   scanner producing a [`Graph`](crate::graph::Graph) directly
//!
//! ```text
//! ┌──────────────┐            ┌──────────────┐
//! │ .ecore/.xmi  │            │  any .xml    │
//! └──────┬───────┘            └──────┬───────┘
//!        ▼                           ▼
//! ┌──────────────────────────────────────────┐
//! │        parse_document (quick-xml)        │
//! └──────┬───────────────────────────┬───────┘
//!        ▼                           ▼
//! ┌──────────────┐            ┌──────────────┐
//! │ ModelSource  │            │ IdRefScanner │
//! │  → Model     │            │  → Graph     │
//! └──────┬───────┘            └──────────────┘
//!        ▼
//!   extract::Extractor → Graph
//! ```
//!
//! ## Usage
//!
//! ```
//! use ecore_graph::interchange::{EcoreXmi, ModelSource};
//!
//! let model = EcoreXmi.read(br#"<ecore:EPackage name="p"/>"#)?;
//! assert_eq!(model.roots().len(), 1);
//! # Ok::<(), ecore_graph::interchange::InterchangeError>(())
//! ```

mod ecore;
mod error;
mod format;
mod scan;
mod xml;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub use ecore::EcoreXmi;
pub use error::InterchangeError;
pub use format::ModelSource;
pub use scan::IdRefScanner;
pub use xml::{XmlElement, parse_document};

/// Which backend reads a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    /// [`EcoreXmi`] followed by the extraction engine.
    Ecore,
    /// [`IdRefScanner`].
    Scan,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ecore => "ecore",
            Self::Scan => "scan",
        })
    }
}

impl FromStr for Backend {
    type Err = InterchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ecore" => Ok(Self::Ecore),
            "scan" => Ok(Self::Scan),
            other => Err(InterchangeError::unsupported(format!("backend `{other}`"))),
        }
    }
}

/// Supported file extensions.
pub fn supported_extensions() -> &'static [&'static str] {
    &["ecore", "xmi", "xml"]
}

/// Detect the backend from a file extension.
///
/// `.ecore` and `.xmi` go through the semantic reader; plain `.xml` has no
/// Ecore guarantees and goes through the scanner.
pub fn detect_source(path: &Path) -> Option<Backend> {
    let ext = path.extension()?.to_str()?;
    match ext.to_lowercase().as_str() {
        "ecore" | "xmi" => Some(Backend::Ecore),
        "xml" => Some(Backend::Scan),
        _ => None,
    }
}
