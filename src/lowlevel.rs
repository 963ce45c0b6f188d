//! Low-level building blocks for custom detection pipelines.
//!
//! These expose the scoring kernel and scan helpers behind [`Matcher`], for
//! callers that manage templates themselves. Most users should prefer
//! [`TemplateStore`] and [`Matcher`].
//!
//! [`Matcher`]: crate::Matcher
//! [`TemplateStore`]: crate::TemplateStore

pub use crate::candidate::Candidate;
pub use crate::kernel::scalar::{scan_full, score_at, template_fits};
pub use crate::kernel::{ScanOutcome, ScanParams, MAX_PIXEL_DIFF};
pub use crate::search::detect_template;

#[cfg(feature = "rayon")]
pub use crate::kernel::rayon::scan_full_par;
