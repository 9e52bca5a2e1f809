//! Room Catalog — static reference sizes for the room types the placer knows.
//!
//! Every type carries a nominal size (used by deterministic placement) and a
//! `[min, max]` range (used when sizes are sampled). Lookup goes through
//! [`normalize`], so `"Living Room"`, `"living-room"` and `"LIVING_ROOM"`
//! resolve to the same entry, and a trailing ordinal (`"Bedroom 2"`) is ignored.

use rand::Rng;
use serde::Serialize;

use crate::layout::room::{RoomSize, DEFAULT_ROOM_SIZE};

// ────────────────────────────────────────────────────────────────────────────
// Static data
// ────────────────────────────────────────────────────────────────────────────

/// Functional zone. Declaration order is the zone-ordering sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Living,
    Kitchen,
    Bathroom,
    Bedroom,
    Other,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomType {
    pub key: &'static str,
    pub display_name: &'static str,
    pub zone: Zone,
    pub nominal: RoomSize,
    pub min: RoomSize,
    pub max: RoomSize,
}

const fn room_type(
    key: &'static str,
    display_name: &'static str,
    zone: Zone,
    nominal: (f64, f64),
    min: (f64, f64),
    max: (f64, f64),
) -> RoomType {
    RoomType {
        key,
        display_name,
        zone,
        nominal: RoomSize::new(nominal.0, nominal.1),
        min: RoomSize::new(min.0, min.1),
        max: RoomSize::new(max.0, max.1),
    }
}

const ROOM_TYPES: &[RoomType] = &[
    room_type("living_room", "Living Room", Zone::Living, (4.0, 5.0), (3.5, 4.0), (6.0, 6.0)),
    room_type("bedroom", "Bedroom", Zone::Bedroom, (3.0, 4.0), (3.0, 3.0), (4.5, 4.5)),
    room_type("kitchen", "Kitchen", Zone::Kitchen, (3.0, 3.0), (2.5, 2.5), (4.0, 4.0)),
    room_type("bathroom", "Bathroom", Zone::Bathroom, (2.0, 2.5), (1.5, 2.0), (3.0, 3.0)),
    room_type("dining_room", "Dining Room", Zone::Living, (3.0, 4.0), (3.0, 3.0), (4.5, 5.0)),
    room_type("study", "Study", Zone::Other, (2.5, 3.5), (2.5, 2.5), (3.5, 4.0)),
    room_type("laundry", "Laundry", Zone::Other, (2.0, 2.0), (1.5, 1.5), (2.5, 2.5)),
    room_type("storage", "Storage", Zone::Other, (2.0, 2.0), (1.0, 1.5), (2.5, 3.0)),
    room_type("garage", "Garage", Zone::Other, (6.0, 6.0), (5.5, 5.5), (7.0, 7.0)),
];

/// alias → canonical key (both already normalized)
const ALIASES: &[(&str, &str)] = &[
    ("dining", "dining_room"),
    ("living", "living_room"),
    ("lounge", "living_room"),
    ("bath", "bathroom"),
    ("toilet", "bathroom"),
    ("wc", "bathroom"),
    ("office", "study"),
    ("utility", "laundry"),
];

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct RoomCatalog {
    types: &'static [RoomType],
    aliases: &'static [(&'static str, &'static str)],
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl RoomCatalog {
    /// The built-in residential catalog.
    pub fn standard() -> Self {
        Self {
            types: ROOM_TYPES,
            aliases: ALIASES,
        }
    }

    pub fn room_types(&self) -> &[RoomType] {
        self.types
    }

    /// Resolves a free-form room name to its type, if any.
    pub fn lookup(&self, name: &str) -> Option<&'static RoomType> {
        let key = normalize(name);
        self.lookup_key(&key)
            .or_else(|| strip_ordinal(&key).and_then(|base| self.lookup_key(base)))
    }

    fn lookup_key(&self, key: &str) -> Option<&'static RoomType> {
        let types = self.types;
        let canonical = self
            .aliases
            .iter()
            .find(|(alias, _)| *alias == key)
            .map_or(key, |(_, target)| *target);
        types.iter().find(|t| t.key == canonical)
    }

    /// Nominal size, or [`DEFAULT_ROOM_SIZE`] for unknown names.
    pub fn nominal_size(&self, name: &str) -> RoomSize {
        self.lookup(name).map_or(DEFAULT_ROOM_SIZE, |t| t.nominal)
    }

    /// Samples width and height uniformly (0.1 m steps) from the type's range.
    /// Returns `None` for unknown names so callers pick their own fallback.
    pub fn sample_size<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> Option<RoomSize> {
        let room_type = self.lookup(name)?;
        Some(RoomSize::new(
            sample_dimension(room_type.min.width, room_type.max.width, rng),
            sample_dimension(room_type.min.height, room_type.max.height, rng),
        ))
    }

    /// Zone of a room. Unknown names are classified by the words they contain,
    /// so `"master_bedroom"` still lands in the bedroom zone.
    pub fn zone_of(&self, name: &str) -> Zone {
        if let Some(room_type) = self.lookup(name) {
            return room_type.zone;
        }
        let key = normalize(name);
        if key.contains("bedroom") {
            Zone::Bedroom
        } else if key.contains("bath") || key.contains("toilet") {
            Zone::Bathroom
        } else if key.contains("kitchen") {
            Zone::Kitchen
        } else if key.contains("living") || key.contains("dining") {
            Zone::Living
        } else {
            Zone::Other
        }
    }
}

fn sample_dimension<R: Rng + ?Sized>(min: f64, max: f64, rng: &mut R) -> f64 {
    if max <= min {
        return min;
    }
    let raw = rng.gen_range(min..=max);
    ((raw * 10.0).round() / 10.0).clamp(min, max)
}

/// Lowercases and folds spaces, hyphens and underscores into single `_`.
/// Other punctuation is dropped.
pub fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;
    for c in name.trim().chars() {
        if c.is_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == '_' || c == '-' {
            pending_separator = true;
        }
    }
    out
}

/// `"bedroom_2"` → `Some("bedroom")`.
fn strip_ordinal(key: &str) -> Option<&str> {
    let (head, tail) = key.rsplit_once('_')?;
    (!head.is_empty() && !tail.is_empty() && tail.chars().all(|c| c.is_ascii_digit()))
        .then_some(head)
}
