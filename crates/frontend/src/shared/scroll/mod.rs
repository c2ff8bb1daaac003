pub mod source;
pub mod visibility;

#[cfg(test)]
pub(crate) mod testing;

pub use source::{watch_visibility, ScrollSource, ScrollSubscription, WindowScroll};
pub use visibility::{Visibility, SCROLL_TOP_THRESHOLD};
