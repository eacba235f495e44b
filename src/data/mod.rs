//! Document import and export
//!
//! A topology round-trips through a single JSON document:
//!
//! ```text
//! {
//!   "points":  [{ "x": 0, "y": 0 }, ...],
//!   "objects": [{ "type": "arc" | "position", "points": [0, ...], "properties": {} }, ...]
//! }
//! ```
//!
//! ## Error Handling
//!
//! All document operations return `DocumentResult<T>`. A document is fully
//! validated before anything is handed back, so a rejected import can never
//! leave a half-applied topology behind.

mod document;
mod error;

pub use document::*;
pub use error::*;
