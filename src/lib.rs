pub mod codec;
/// Voxel map engine for 512x512x64 block worlds in the .vxl column format
/// Decode, edit, re-encode and stream maps; drop unsupported regions;
/// recompute sun shadows into color alpha
pub mod map;
pub mod shadow;
pub mod support;
pub mod util;

pub use codec::{decode, encode, StreamEncoder, VxlError};
pub use map::{VoxelMap, DEFAULT_COLOR, MAP_X, MAP_Y, MAP_Z};
pub use shadow::{sunblock, update_shadows};
pub use support::check_support;
pub use util::{map_digest, random_point};
