/// Decoder, batch encoder, and streaming encoder for the .vxl column format
///
/// A map is 262,144 variable-length columns, Y-major then X-major. Each
/// column is a chain of 4-byte-aligned spans: a header `N, S, E, A`, then
/// `E - S + 1` "top" color words for z = S..=E, and on non-terminal spans
/// the "bottom" color words that belong to the run just above the NEXT
/// span's air gap. `N` is the span's total length in 4-byte chunks,
/// with `N == 0` marking the final span of the column.
pub mod decode;
pub mod encode;
pub mod stream;

pub use decode::decode;
pub use encode::encode;
pub use stream::StreamEncoder;

use crate::map::{VoxelMap, MAP_X, MAP_Y, MAP_Z};
use thiserror::Error;

/// Ways decoding a .vxl byte stream can fail.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Error)]
pub enum VxlError {
    /// A span header is internally inconsistent.
    #[error("malformed span at byte {offset}: {reason}")]
    Malformed {
        /// Byte offset of the offending span header.
        offset: usize,
        /// What the header got wrong.
        reason: &'static str,
    },
    /// The input ended before all 262,144 columns were parsed.
    #[error("input truncated at byte {offset}")]
    Truncated {
        /// Byte offset at which more input was needed.
        offset: usize,
    },
}

/// A surface voxel is a solid voxel with air on at least one of its six
/// axis faces. The top of the world always exposes (`z == 0` is a surface
/// whenever solid); the map rim in X and Y and the underside at `z == 63`
/// never do. Only surface voxels carry colors on the wire.
#[inline]
pub(crate) fn is_surface(map: &VoxelMap, x: usize, y: usize, z: usize) -> bool {
    if !map.is_solid(x, y, z) {
        return false;
    }
    if z == 0 {
        return true;
    }
    (x > 0 && !map.is_solid(x - 1, y, z))
        || (x + 1 < MAP_X && !map.is_solid(x + 1, y, z))
        || (y > 0 && !map.is_solid(x, y - 1, z))
        || (y + 1 < MAP_Y && !map.is_solid(x, y + 1, z))
        || !map.is_solid(x, y, z - 1)
        || (z + 1 < MAP_Z && !map.is_solid(x, y, z + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_rules() {
        let map = VoxelMap::filled();
        // in a fully solid world only the sky side exposes
        assert!(is_surface(&map, 100, 100, 0));
        assert!(!is_surface(&map, 100, 100, 1));
        assert!(!is_surface(&map, 100, 100, 63));
        // the X/Y rim is not an exposure
        assert!(!is_surface(&map, 0, 100, 30));
        assert!(!is_surface(&map, 511, 100, 30));
        assert!(!is_surface(&map, 100, 0, 30));
        assert!(!is_surface(&map, 100, 511, 30));
    }

    #[test]
    fn test_surface_needs_solid() {
        let map = VoxelMap::empty();
        assert!(!is_surface(&map, 10, 10, 0));
    }

    #[test]
    fn test_air_neighbor_exposes() {
        let mut map = VoxelMap::filled();
        map.set_solid(100, 100, 30, false);
        assert!(is_surface(&map, 99, 100, 30));
        assert!(is_surface(&map, 101, 100, 30));
        assert!(is_surface(&map, 100, 99, 30));
        assert!(is_surface(&map, 100, 101, 30));
        assert!(is_surface(&map, 100, 100, 29));
        assert!(is_surface(&map, 100, 100, 31));
        assert!(!is_surface(&map, 98, 100, 30));
    }
}
