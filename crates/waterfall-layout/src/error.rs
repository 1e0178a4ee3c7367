use thiserror::Error;

use crate::axis::Axis;

/// Errors surfaced by [`WaterfallLayout`](crate::WaterfallLayout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The host reported no bounds, so there is no width to lay out against.
    #[error("layout is not attached to a host with bounds")]
    Detached,

    /// A query arrived before the first completed `prepare` pass.
    #[error("layout has not been prepared")]
    NotPrepared,

    /// Waterfall columns only stack along the vertical axis.
    #[error("scroll direction {0:?} is not supported; waterfall layout is vertical only")]
    UnsupportedScrollDirection(Axis),
}
