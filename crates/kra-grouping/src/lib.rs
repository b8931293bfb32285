//! KRA Row Grouping
//!
//! Decides which rows of a grouped table or timeline print their group
//! header, so a shared label appears once per group instead of on every row.
//!
//! # Core Concepts
//!
//! - [`FirstOccurrenceIndex`]: Key → id of the first record carrying that key
//! - [`GroupFlags`]: Per-row header flags for two grouping levels
//! - [`two_level_flags`]: Builds two independent indices and combines them
//!
//! "First" always means first in input order. Callers sort beforehand.
//!
//! # Example
//!
//! ```rust,ignore
//! use kra_grouping::FirstOccurrenceIndex;
//!
//! let rows = [(1, "A"), (2, "A"), (3, "B")];
//! let index = FirstOccurrenceIndex::build(&rows, |r| r.1, |r| r.0);
//!
//! assert!(index.is_first_for_key(&rows[0], |r| r.1, |r| r.0));
//! assert!(!index.is_first_for_key(&rows[1], |r| r.1, |r| r.0));
//! ```

mod index;
mod levels;

pub use index::{build_first_occurrence_index, FirstOccurrenceIndex};
pub use levels::{two_level_flags, GroupFlags};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
