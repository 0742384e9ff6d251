/// Connectivity query: is a voxel held up by anything reaching bedrock?
///
/// Destroying a block can leave a floating island; game rules drop it. The
/// check walks the solid region around a seed voxel and reports whether the
/// walk ever touches the two bedrock-adjacent layers.
use crate::map::{voxel_key, VoxelMap, MAP_X, MAP_Y, MAP_Z};
use glam::IVec3;
use log::trace;
use std::collections::HashSet;

/// Any region reaching this depth counts as supported.
const SUPPORT_Z: i32 = 62;

const NEIGHBOR_OFFSETS: [IVec3; 6] = [
    IVec3::new(0, 0, -1),
    IVec3::new(0, -1, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(-1, 0, 0),
    IVec3::new(1, 0, 0),
    IVec3::new(0, 0, 1),
];

/// Flood-fill from `(x, y, z)` through solid, axis-adjacent voxels.
///
/// Returns 0 if the region reaches `z >= 62` (supported) or the seed is
/// air; otherwise returns the region's size. With `destroy` set, an
/// unsupported region is also removed: geometry cleared, colors erased.
/// Without it, the map is never modified.
///
/// The walk uses a growable stack and a hashed visited set, so regions of
/// millions of voxels are fine; nothing is recursive and no scratch
/// outlives the call.
///
/// # Panics
///
/// Panics if the seed coordinates are out of range.
pub fn check_support(map: &mut VoxelMap, x: usize, y: usize, z: usize, destroy: bool) -> usize {
    if !map.is_solid(x, y, z) {
        return 0;
    }

    let mut stack: Vec<IVec3> = Vec::with_capacity(4096);
    let mut visited: HashSet<u32> = HashSet::new();
    stack.push(IVec3::new(x as i32, y as i32, z as i32));

    while let Some(node) = stack.pop() {
        if node.z >= SUPPORT_Z {
            return 0;
        }
        let key = voxel_key(node.x as usize, node.y as usize, node.z as usize);
        if visited.insert(key) {
            for offset in NEIGHBOR_OFFSETS {
                let n = node + offset;
                if in_bounds(n) && map.is_solid(n.x as usize, n.y as usize, n.z as usize) {
                    stack.push(n);
                }
            }
        }
    }

    if destroy {
        for &key in &visited {
            let (x, y, z) = crate::map::key_to_xyz(key);
            map.set_solid(x, y, z, false);
        }
        trace!("dropped unsupported region of {} voxels", visited.len());
    }
    visited.len()
}

#[inline]
fn in_bounds(p: IVec3) -> bool {
    p.x >= 0
        && p.x < MAP_X as i32
        && p.y >= 0
        && p.y < MAP_Y as i32
        && p.z >= 0
        && p.z < MAP_Z as i32
}
