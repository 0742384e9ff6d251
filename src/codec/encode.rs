/// .vxl encoder: re-emits the column-run byte format from a dense map
use super::is_surface;
use crate::map::{VoxelMap, DEFAULT_COLOR, MAP_X, MAP_Y, MAP_Z};

/// Rough per-map output size, used to seed the buffer. A typical terrain
/// map lands between one and three MiB.
const OUTPUT_RESERVE: usize = 2 * 1024 * 1024;

/// Encode the whole map into a fresh byte buffer.
///
/// Every surface voxel is emitted with its stored color, or
/// [`DEFAULT_COLOR`] when no color was ever assigned. Interior solids and
/// air carry no payload. Encoding cannot fail.
pub fn encode(map: &VoxelMap) -> Vec<u8> {
    let mut out = Vec::with_capacity(OUTPUT_RESERVE);
    for y in 0..MAP_Y {
        for x in 0..MAP_X {
            encode_column(map, x, y, &mut out);
        }
    }
    out
}

/// Append the span chain for one column to `out`.
///
/// Each pass over the loop consumes one air/top/interior/bottom cycle. The
/// one irregularity is a surface run that touches the floor of the map: it
/// cannot be a bottom run (there is no air gap after it to anchor the next
/// header's air-start), so the span is emitted with an empty bottom and the
/// run becomes the top run of a final, terminal span.
pub(crate) fn encode_column(map: &VoxelMap, x: usize, y: usize, out: &mut Vec<u8>) {
    let mut k = 0;
    while k < MAP_Z {
        let air_start = k;
        while k < MAP_Z && !map.is_solid(x, y, k) {
            k += 1;
        }

        let top_start = k;
        while k < MAP_Z && is_surface(map, x, y, k) {
            k += 1;
        }
        let top_end = k; // exclusive

        // skip interior solids
        while k < MAP_Z && map.is_solid(x, y, k) && !is_surface(map, x, y, k) {
            k += 1;
        }

        let bottom_start = k;
        let mut probe = k;
        while probe < MAP_Z && is_surface(map, x, y, probe) {
            probe += 1;
        }
        if probe < MAP_Z {
            // a real bottom run: air follows it, so walk through it
            while k < MAP_Z && is_surface(map, x, y, k) {
                k += 1;
            }
        }
        let bottom_end = k; // exclusive; equals bottom_start when deferred

        let top_len = top_end - top_start;
        let bottom_len = bottom_end - bottom_start;

        if k == MAP_Z {
            out.push(0);
        } else {
            out.push((top_len + bottom_len + 1) as u8);
        }
        out.push(top_start as u8);
        out.push((top_end - 1) as u8);
        out.push(air_start as u8);

        for z in top_start..top_end {
            push_color(map, x, y, z, out);
        }
        for z in bottom_start..bottom_end {
            push_color(map, x, y, z, out);
        }
    }
}

/// Append one color word: B, G, R, A on the wire, ARGB in memory.
#[inline]
fn push_color(map: &VoxelMap, x: usize, y: usize, z: usize, out: &mut Vec<u8>) {
    let color = map.color(x, y, z).unwrap_or(DEFAULT_COLOR);
    out.extend_from_slice(&color.to_le_bytes());
}
