/// .vxl decoder: materializes a dense map from the column-run byte format
use super::VxlError;
use crate::map::{VoxelMap, MAP_X, MAP_Y, MAP_Z};
use log::debug;

/// Decode a full map from `data`.
///
/// Columns are consumed in Y-major, X-major order until all 262,144 have
/// been parsed; trailing bytes are ignored. Each column starts fully solid
/// and the span chain carves the air gaps out, so a span may legally
/// re-carve or re-color a region an earlier span already touched.
pub fn decode(data: &[u8]) -> Result<VoxelMap, VxlError> {
    let mut map = VoxelMap::filled();
    let mut pos = 0;
    for y in 0..MAP_Y {
        for x in 0..MAP_X {
            pos = decode_column(&mut map, data, pos, x, y)?;
        }
    }
    debug!(
        "decoded vxl map: {} of {} bytes, {} color entries",
        pos,
        data.len(),
        map.color_count()
    );
    Ok(map)
}

/// Decode one column starting at `pos`; returns the offset of the next one.
fn decode_column(
    map: &mut VoxelMap,
    data: &[u8],
    mut pos: usize,
    x: usize,
    y: usize,
) -> Result<usize, VxlError> {
    // cursor below which geometry is already settled
    let mut z = 0;
    loop {
        let header = data
            .get(pos..pos + 4)
            .ok_or(VxlError::Truncated { offset: pos })?;
        let chunks = header[0] as usize;
        let top_start = header[1] as usize;
        let top_end = header[2] as usize; // inclusive

        // a collapsed top run (S == E + 1) is legal; anything further apart
        // would make the run length negative
        if top_start > top_end + 1 {
            return Err(VxlError::Malformed {
                offset: pos,
                reason: "top run starts past its end",
            });
        }
        let len_top = top_end + 1 - top_start;
        if top_start > MAP_Z || (len_top > 0 && top_end >= MAP_Z) {
            return Err(VxlError::Malformed {
                offset: pos,
                reason: "top run outside the column",
            });
        }

        // carve the air gap above the top run
        for i in z..top_start {
            map.set_solid(x, y, i, false);
        }

        let top_words = data
            .get(pos + 4..pos + 4 + 4 * len_top)
            .ok_or(VxlError::Truncated { offset: pos + 4 })?;
        for (i, word) in top_words.chunks_exact(4).enumerate() {
            let color = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
            map.set_color(x, y, top_start + i, color);
        }

        if chunks == 0 {
            // terminal span: its length is implied by the top run alone
            return Ok(pos + 4 * (len_top + 1));
        }

        if chunks < 1 + len_top {
            return Err(VxlError::Malformed {
                offset: pos,
                reason: "chunk count shorter than its top colors",
            });
        }
        let len_bottom = (chunks - 1) - len_top;
        let bottom_words = data
            .get(pos + 4 + 4 * len_top..pos + 4 * chunks)
            .ok_or(VxlError::Truncated {
                offset: pos + 4 + 4 * len_top,
            })?;

        // the bottom run's placement comes from the NEXT header's air-start
        pos += 4 * chunks;
        let next_header = data
            .get(pos..pos + 4)
            .ok_or(VxlError::Truncated { offset: pos })?;
        let air_start = next_header[3] as usize;
        if air_start < len_bottom || air_start > MAP_Z {
            return Err(VxlError::Malformed {
                offset: pos,
                reason: "bottom run outside the column",
            });
        }
        let bottom_start = air_start - len_bottom;
        for (i, word) in bottom_words.chunks_exact(4).enumerate() {
            let color = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
            map.set_color(x, y, bottom_start + i, color);
        }
        z = air_start;
    }
}
