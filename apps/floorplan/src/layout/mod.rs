// Room catalog, placement strategies and the value types they share.
// Everything here is synchronous and request-scoped; no shared mutable state.

pub mod adjacency;
pub mod catalog;
pub mod placer;
pub mod room;
pub mod zoning;

// Re-export the public API consumed by the plan generator and handlers.
pub use catalog::{RoomCatalog, RoomType};
pub use placer::{place, place_sampled, PlacementOptions, Strategy};
pub use room::{Bounds, Layout, RoomInstance, RoomSize, RoomSpec};
