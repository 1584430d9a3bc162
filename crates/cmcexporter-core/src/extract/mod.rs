//! HTML extraction (schema + traversal).
//!
//! The upstream page is an external, unversioned contract: if its structure
//! changes, rows stop matching and scrapes quietly return fewer records. All
//! selectors therefore live in [`schema::ExtractionSchema`] and can be swapped
//! from config without touching the traversal.

pub mod html;
pub mod schema;

pub use html::{extract_records, is_placeholder, normalize_market_cap};
pub use schema::{CompiledSchema, ExtractionSchema, FieldRule};
