/// Sun occlusion: traces a fixed diagonal ray above each colored voxel and
/// stores the light level in the alpha channel of its color
use crate::map::grid::solid_wrapped_in;
use crate::map::{key_to_xyz, VoxelMap};

const SHADOW_DISTANCE: i32 = 18;
const SHADOW_STEP: i32 = 2;

/// Light reaching `(x, y, z)` from the fixed sun direction.
///
/// Steps along -Y,-Z for nine steps with weights 18, 16, .. 2, subtracting
/// each weight whose sample is solid (X and Y wrap; outside Z is air) from
/// a base of 127. Callers store the result in a color's alpha byte; only
/// the low 8 bits are meaningful.
pub fn sunblock(map: &VoxelMap, x: i32, y: i32, z: i32) -> i32 {
    trace_ray(&map.columns, x, y, z)
}

fn trace_ray(columns: &[u64], x: i32, mut y: i32, mut z: i32) -> i32 {
    let mut dec = SHADOW_DISTANCE;
    let mut acc = 127;
    while dec > 0 && z > 0 {
        y -= 1;
        z -= 1;
        if solid_wrapped_in(columns, x, y, z) {
            acc -= dec;
        }
        dec -= SHADOW_STEP;
    }
    acc
}

/// Recompute the alpha byte of every color entry in place.
///
/// Geometry and the key set are untouched; only color values change, so
/// running this twice is the same as running it once.
pub fn update_shadows(map: &mut VoxelMap) {
    let columns = &map.columns;
    for (&key, color) in map.colors.iter_mut() {
        let (x, y, z) = key_to_xyz(key);
        let alpha = trace_ray(columns, x as i32, y as i32, z as i32);
        *color = (*color & 0x00FF_FFFF) | ((alpha as u32 & 0xFF) << 24);
    }
}
