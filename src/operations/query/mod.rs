mod current_vertices;
mod extent;
mod world_pose;

pub use current_vertices::CurrentVertices;
pub use extent::Extent;
pub use world_pose::{Pose, WorldPose};
