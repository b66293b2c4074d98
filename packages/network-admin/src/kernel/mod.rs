//! Infrastructure seams: platform traits, their production adapter, and test doubles.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{CommandDeps, WpCliAdapter};
pub use test_dependencies::{MembershipCallArgs, MockMultisite, PlatformCall};
pub use traits::BaseMultisite;
