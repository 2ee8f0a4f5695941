/// Character definitions and shape recipes.
pub mod defs;
/// Spark, the roaming helper.
pub mod dragon;
/// Characters following the player.
pub mod escort;
/// Which characters appear where.
pub mod visibility;

pub use defs::{Look, NpcDef, NpcId, residents};
pub use dragon::{dragon_appears, dragon_lines, dragon_origin};
pub use escort::{Escort, follow_step};
pub use visibility::{is_visible, shows_indicator, visible_in};
