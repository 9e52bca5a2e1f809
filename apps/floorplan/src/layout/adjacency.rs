//! Fixed adjacency table and group formation for the adjacency placement strategy.

/// room type key → neighbor type keys, in the order they join the group.
const ADJACENCY: &[(&str, &[&str])] = &[
    ("living_room", &["dining_room", "kitchen"]),
    ("dining_room", &["kitchen"]),
    ("kitchen", &["dining_room", "laundry"]),
    ("bedroom", &["bathroom"]),
    ("garage", &["storage", "laundry"]),
];

pub fn neighbors(key: &str) -> &'static [&'static str] {
    ADJACENCY
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, n)| *n)
        .unwrap_or(&[])
}

/// Partitions room indices into placement groups.
///
/// `keys[i]` is the catalog key of room `i` (`None` when unknown). Rooms are
/// visited in order; each unplaced room opens a group and pulls in the first
/// still-unplaced room of every neighbor type. Unmapped rooms stay alone.
pub fn group_rooms(keys: &[Option<&str>]) -> Vec<Vec<usize>> {
    let mut placed = vec![false; keys.len()];
    let mut groups = Vec::new();

    for i in 0..keys.len() {
        if placed[i] {
            continue;
        }
        placed[i] = true;
        let mut group = vec![i];

        if let Some(key) = keys[i] {
            for neighbor in neighbors(key) {
                let next = (0..keys.len()).find(|&j| !placed[j] && keys[j] == Some(*neighbor));
                if let Some(j) = next {
                    placed[j] = true;
                    group.push(j);
                }
            }
        }

        groups.push(group);
    }

    groups
}
