//! Trellis Navigation
//!
//! Turns a navigation request into the single browser primitive that realizes it:
//! 1. `#fragment` → update the fragment only
//! 2. Different, non-empty host → full page load
//! 3. Same pathname and query → update the fragment only
//! 4. Anything else → push a history entry

mod error;
mod location;
mod plan;
mod target;

pub use error::NavigationError;
pub use location::{resolve_url, UrlParts};
pub use plan::{plan_navigation, NavigationPlan};
pub use target::{LinkClick, NavigationTarget};

pub type Result<T> = std::result::Result<T, NavigationError>;
