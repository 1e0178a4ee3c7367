//! Multi-column waterfall layout for virtualized, sectioned lists.
//!
//! [`WaterfallLayout`] turns per-item size hints and per-section settings into
//! placement rectangles, keeps section headers and footers pinned to the
//! viewport, and answers "what intersects this rect" without scanning every
//! item. The crate only produces geometry; the host widget owns scrolling and
//! drawing.

mod attributes;
mod axis;
mod config;
mod delegate;
mod error;
mod host;
mod layout;
mod model;
mod pinning;
mod placement;
mod union_index;
mod viewport;

pub use attributes::*;
pub use axis::*;
pub use config::*;
pub use delegate::*;
pub use error::*;
pub use host::*;
pub use layout::*;
pub use model::*;
pub use pinning::*;
pub use placement::*;
pub use union_index::*;
pub use viewport::*;

pub use waterfall_geometry::{EdgeInsets, Rect, Size};

pub mod prelude {
    pub use crate::attributes::{ElementKind, IndexPath, LayoutAttributes, SectionRect};
    pub use crate::axis::Axis;
    pub use crate::config::{InsetReference, LayoutConfig, RenderDirection};
    pub use crate::delegate::WaterfallLayoutDelegate;
    pub use crate::error::LayoutError;
    pub use crate::host::LayoutHost;
    pub use crate::layout::WaterfallLayout;
    pub use waterfall_geometry::prelude::*;
}
