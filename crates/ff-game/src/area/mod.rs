/// Building areas and moving between them.
pub mod controller;
/// Static props of every area.
pub mod layout;
/// What is placed in the current area.
pub mod scene;

pub use controller::{
    build_area, check_edges, enter, navigate, navigation_for, tick_transition,
};
pub use layout::{Prop, interactive_props, props};
pub use scene::{Scene, SpawnedItem};
