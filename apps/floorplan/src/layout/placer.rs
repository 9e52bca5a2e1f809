//! Room Placer — turns an ordered list of requested rooms into a Layout.
//!
//! # Strategies
//! - [`Strategy::RowWrap`]: a cursor walks left to right, wrapping to a new
//!   row when the next room would cross `max_row_width`. Rows never overlap
//!   because each row starts `row_height + row_gap` below the previous one.
//! - [`Strategy::Adjacency`]: rooms are first grouped through the adjacency
//!   table, then each group is laid out left to right on its own row.
//!
//! Sizes come from the room's explicit size, else the catalog. [`place`]
//! uses nominal sizes and is fully deterministic; [`place_sampled`] draws
//! catalog sizes from an injected RNG.
//!
//! The wrap test is strict (`x + width > max_row_width`): a room that ends
//! exactly on the boundary stays in the current row. The test also applies at
//! the start of a row, so a room wider than the whole row still moves the
//! cursor down by `row_gap` before it is placed.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::layout::adjacency::group_rooms;
use crate::layout::catalog::RoomCatalog;
use crate::layout::room::{Layout, RoomInstance, RoomSize, RoomSpec, DEFAULT_ROOM_SIZE};
use crate::layout::zoning::order_by_zone;

pub const DEFAULT_MAX_ROW_WIDTH: f64 = 12.0;
pub const ROW_GAP: f64 = 1.0;
pub const COLUMN_GAP: f64 = 1.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    RowWrap,
    Adjacency,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacementOptions {
    pub max_row_width: f64,
    pub row_gap: f64,
    pub column_gap: f64,
    pub strategy: Strategy,
    /// Reorder rooms by functional zone before placing them.
    pub zone_order: bool,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            max_row_width: DEFAULT_MAX_ROW_WIDTH,
            row_gap: ROW_GAP,
            column_gap: COLUMN_GAP,
            strategy: Strategy::default(),
            zone_order: false,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry points
// ────────────────────────────────────────────────────────────────────────────

/// Places rooms using explicit or nominal catalog sizes. Never fails.
pub fn place(rooms: &[RoomSpec], options: &PlacementOptions, catalog: &RoomCatalog) -> Layout {
    let rooms = prepare(rooms, options, catalog);
    let sized = rooms
        .iter()
        .map(|room| SizedRoom {
            name: &room.name,
            size: resolve_explicit(room).unwrap_or_else(|| catalog.nominal_size(&room.name)),
        })
        .collect::<Vec<_>>();
    arrange(&sized, options, catalog)
}

/// Like [`place`], but catalog rooms get a size sampled from their range.
/// Rooms with an explicit size keep it; unknown rooms get the default size.
pub fn place_sampled<R: Rng + ?Sized>(
    rooms: &[RoomSpec],
    options: &PlacementOptions,
    catalog: &RoomCatalog,
    rng: &mut R,
) -> Layout {
    let rooms = prepare(rooms, options, catalog);
    let sized = rooms
        .iter()
        .map(|room| SizedRoom {
            name: &room.name,
            size: resolve_explicit(room)
                .or_else(|| catalog.sample_size(&room.name, rng))
                .unwrap_or(DEFAULT_ROOM_SIZE),
        })
        .collect::<Vec<_>>();
    arrange(&sized, options, catalog)
}

// ────────────────────────────────────────────────────────────────────────────
// Internals
// ────────────────────────────────────────────────────────────────────────────

struct SizedRoom<'a> {
    name: &'a str,
    size: RoomSize,
}

fn prepare<'a>(
    rooms: &'a [RoomSpec],
    options: &PlacementOptions,
    catalog: &RoomCatalog,
) -> Cow<'a, [RoomSpec]> {
    if options.zone_order {
        Cow::Owned(order_by_zone(rooms, catalog))
    } else {
        Cow::Borrowed(rooms)
    }
}

/// Explicit sizes that are not usable fall through to the catalog.
fn resolve_explicit(room: &RoomSpec) -> Option<RoomSize> {
    room.size.filter(RoomSize::is_valid)
}

fn arrange(rooms: &[SizedRoom<'_>], options: &PlacementOptions, catalog: &RoomCatalog) -> Layout {
    let rooms = match options.strategy {
        Strategy::RowWrap => row_wrap(rooms, options),
        Strategy::Adjacency => adjacency_rows(rooms, options, catalog),
    };
    Layout { rooms }
}

/// Row cursor shared by both strategies.
struct RowCursor {
    x: f64,
    y: f64,
    row_height: f64,
    row_gap: f64,
    column_gap: f64,
}

impl RowCursor {
    fn new(options: &PlacementOptions) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            row_height: 0.0,
            row_gap: options.row_gap,
            column_gap: options.column_gap,
        }
    }

    fn row_started(&self) -> bool {
        self.x > 0.0
    }

    fn wrap(&mut self) {
        self.x = 0.0;
        self.y += self.row_height + self.row_gap;
        self.row_height = 0.0;
    }

    fn advance(&mut self, name: &str, size: RoomSize) -> RoomInstance {
        let room = RoomInstance::new(name, self.x, self.y, size);
        self.x += size.width + self.column_gap;
        self.row_height = self.row_height.max(size.height);
        room
    }
}

fn row_wrap(rooms: &[SizedRoom<'_>], options: &PlacementOptions) -> Vec<RoomInstance> {
    let mut cursor = RowCursor::new(options);
    rooms
        .iter()
        .map(|room| {
            if cursor.x + room.size.width > options.max_row_width {
                cursor.wrap();
            }
            cursor.advance(room.name, room.size)
        })
        .collect()
}

fn adjacency_rows(
    rooms: &[SizedRoom<'_>],
    options: &PlacementOptions,
    catalog: &RoomCatalog,
) -> Vec<RoomInstance> {
    let keys: Vec<Option<&str>> = rooms
        .iter()
        .map(|room| catalog.lookup(room.name).map(|t| t.key))
        .collect();

    let mut cursor = RowCursor::new(options);
    let mut placed = Vec::with_capacity(rooms.len());
    for group in group_rooms(&keys) {
        if cursor.row_started() {
            cursor.wrap();
        }
        for idx in group {
            placed.push(cursor.advance(rooms[idx].name, rooms[idx].size));
        }
    }
    placed
}
