//! Testing utilities for the waterfall layout

pub mod assertions;
pub mod delegate;
pub mod host;
pub mod scenario;

pub use assertions::*;
pub use delegate::*;
pub use host::*;
pub use scenario::*;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::delegate::{SectionOverrides, TestDelegate};
    pub use crate::host::TestHost;
    pub use crate::scenario::{random_scenario, Scenario};
}
