pub mod amperage;
pub mod bus_size;
pub mod common_setting_kind;
pub mod depth;
pub mod section_type;
pub mod section_width;

pub use amperage::Amperage;
pub use bus_size::BusSize;
pub use common_setting_kind::CommonSettingKind;
pub use depth::Depth;
pub use section_type::SectionType;
pub use section_width::SectionWidth;
