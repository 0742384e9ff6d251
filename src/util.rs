/// Map-wide queries that sit on top of the grid: spawn point selection and
/// a content fingerprint for map cache lookups
use crate::map::VoxelMap;
use crc32fast::Hasher;

/// The layer a standing player occupies; columns solid here are walkable.
const WALK_Z: usize = 62;

/// Pick a reachable point inside the rectangle `[x1, x2) x [y1, y2)`.
///
/// Coordinates are clamped into the map first. Candidates are the columns
/// solid at z = 62; `r1` in `[0, 1)` selects one. If the rectangle holds no
/// walkable column at all, the fallback is a plain affine point inside the
/// rectangle from `r1` and `r2`.
pub fn random_point(
    map: &VoxelMap,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    r1: f32,
    r2: f32,
) -> (i32, i32) {
    let x1 = x1.clamp(0, 511);
    let y1 = y1.clamp(0, 511);
    let x2 = x2.clamp(0, 511);
    let y2 = y2.clamp(0, 511);

    let mut candidates = Vec::new();
    for x in x1..x2 {
        for y in y1..y2 {
            if map.is_solid(x as usize, y as usize, WALK_Z) {
                candidates.push((x, y));
            }
        }
    }

    if candidates.is_empty() {
        (scaled(x1, x2, r1), scaled(y1, y2, r2))
    } else {
        candidates[scaled(0, candidates.len() as i32, r1) as usize]
    }
}

#[inline]
fn scaled(a: i32, b: i32, t: f32) -> i32 {
    (t * (b - a) as f32 + a as f32) as i32
}

/// CRC32 fingerprint of the map as an 8-digit uppercase hex string.
///
/// The hash covers a canonical serialization: every column's occupancy
/// word little-endian in column order, then each color entry sorted by
/// voxel key as little-endian key and color words. Two maps digest equal
/// exactly when geometry and colors are equal, regardless of platform or
/// of the color table's internal order.
pub fn map_digest(map: &VoxelMap) -> String {
    let mut hasher = Hasher::new();
    for word in &map.columns {
        hasher.update(&word.to_le_bytes());
    }

    let mut entries: Vec<(u32, u32)> = map
        .colors
        .iter()
        .map(|(&key, &color)| (key, color))
        .collect();
    entries.sort_unstable_by_key(|&(key, _)| key);
    for (key, color) in entries {
        hasher.update(&key.to_le_bytes());
        hasher.update(&color.to_le_bytes());
    }

    format!("{:08X}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_point() {
        let map = VoxelMap::empty();
        assert_eq!(random_point(&map, 100, 100, 200, 200, 0.5, 0.25), (150, 125));
    }

    #[test]
    fn test_picks_walkable_column() {
        let mut map = VoxelMap::empty();
        map.set_solid(150, 160, 62, true);
        for r in [0.0, 0.5, 0.99] {
            assert_eq!(random_point(&map, 100, 100, 200, 200, r, r), (150, 160));
        }
    }

    #[test]
    fn test_rect_is_clamped() {
        let map = VoxelMap::empty();
        // (-100..1000) clamps to (0..511); 0.5 lands mid-map
        assert_eq!(random_point(&map, -100, -100, 1000, 1000, 0.5, 0.5), (255, 255));
    }

    #[test]
    fn test_digest_format() {
        let digest = map_digest(&VoxelMap::empty());
        assert_eq!(digest.len(), 8);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn test_digest_tracks_content() {
        let mut map = VoxelMap::empty();
        let empty = map_digest(&map);

        map.set_solid(10, 10, 10, true);
        let solid = map_digest(&map);
        assert_ne!(empty, solid);

        map.set_color(10, 10, 10, 0xFF336699);
        let colored = map_digest(&map);
        assert_ne!(solid, colored);

        map.set_solid(10, 10, 10, false);
        assert_eq!(map_digest(&map), empty);
    }

    #[test]
    fn test_digest_ignores_insertion_order() {
        let mut a = VoxelMap::empty();
        let mut b = VoxelMap::empty();
        a.set_color(1, 1, 1, 0xFF000001);
        a.set_color(2, 2, 2, 0xFF000002);
        b.set_color(2, 2, 2, 0xFF000002);
        b.set_color(1, 1, 1, 0xFF000001);
        assert_eq!(map_digest(&a), map_digest(&b));
    }
}
