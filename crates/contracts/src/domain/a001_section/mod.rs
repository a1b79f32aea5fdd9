pub mod model;
pub mod resolver;

pub use model::{AssetRequirement, SectionSpec};
pub use resolver::{amperage_tier, connection_bar_stack_asset, resolve_assets};
