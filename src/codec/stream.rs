/// Resumable encoder that yields the map a batch of columns at a time,
/// for feeding a network send loop without building the whole blob up front
use super::encode::encode_column;
use crate::map::{VoxelMap, MAP_X, MAP_Y};
use log::debug;

/// Guess at the span bytes one column produces; only sizes the buffer.
const COLUMN_RESERVE: usize = 24;

/// Incremental .vxl encoder.
///
/// The encoder deep-copies the map at construction, so edits made to the
/// original while a transfer is in flight never tear the stream: the bytes
/// always describe the snapshot. Concatenating every block equals
/// [`encode`](super::encode) of that snapshot exactly.
pub struct StreamEncoder {
    map: VoxelMap,
    cursor_x: usize,
    cursor_y: usize,
}

impl StreamEncoder {
    /// Snapshot `map` and start the column cursor at `(0, 0)`.
    pub fn new(map: &VoxelMap) -> Self {
        Self {
            map: map.clone(),
            cursor_x: 0,
            cursor_y: 0,
        }
    }

    /// Whether every column has been emitted.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.cursor_y >= MAP_Y
    }

    /// Emit up to `columns` columns from the cursor, in Y-major then
    /// X-major order, and advance. Returns an empty vector once the map is
    /// exhausted.
    pub fn next_block(&mut self, columns: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(columns.min(MAP_X) * COLUMN_RESERVE);
        let mut emitted = 0;
        while self.cursor_y < MAP_Y && emitted < columns {
            encode_column(&self.map, self.cursor_x, self.cursor_y, &mut out);
            emitted += 1;
            self.cursor_x += 1;
            if self.cursor_x == MAP_X {
                self.cursor_x = 0;
                self.cursor_y += 1;
            }
        }
        if emitted > 0 && self.is_done() {
            debug!("vxl stream complete");
        }
        out
    }
}
