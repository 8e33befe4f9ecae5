//! Pagination / spread engine and the input signals that drive it.

pub mod engine;
pub mod input;
pub mod state;

pub use engine::{SpreadEngine, VisiblePages};
pub use input::{
    is_wide_viewport, media_query, NavigationCommand, NavigationKey, SwipeDirection, SwipeTracker,
};
pub use state::NavigationState;
