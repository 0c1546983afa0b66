//! World-space interaction tools.
//!
//! Currently only cabin picking: ray casts from the cursor against cabin
//! bounds, hover highlight and click-to-board.

/// Cabin picking and hover highlight.
pub mod picking;
