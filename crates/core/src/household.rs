//! Household composition rules.
//!
//! A household member's disability type and diaper size are only kept when
//! the matching flag is set; the flag is the source of truth.

use crate::text::non_blank;

/// Keep `detail` only when `flag` is set, trimmed and non-blank.
pub fn conditional_detail(flag: bool, detail: Option<&str>) -> Option<String> {
    if flag {
        non_blank(detail)
    } else {
        None
    }
}
