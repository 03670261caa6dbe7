//! # Selector Implementations
//!
//! This module provides the selectors a [`Routes`](crate::routes::Routes)
//! container can use to choose a declaration:
//!
//! - **Exact matching**: [`ExactSelector`], the default.
//! - **Segment matching**: [`SegmentSelector`], `:param` and `*` catch-all.
//! - **Radix matching**: `MatchitSelector` (feature `matchit`).
//!
//! # Choosing a Selector
//!
//! | Selector | Patterns | Tie-break |
//! |----------|----------|-----------|
//! | `ExactSelector` | Literal paths | First declaration |
//! | `SegmentSelector` | `/users/:id`, `/files/*rest` | First declaration |
//! | `MatchitSelector` | `/users/:id`, `/files/*rest` | Most specific pattern |

mod exact;
mod segment;

#[cfg(feature = "matchit")]
mod matchit;

pub use exact::ExactSelector;
pub use segment::SegmentSelector;

#[cfg(feature = "matchit")]
pub use self::matchit::MatchitSelector;
