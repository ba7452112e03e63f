
pub mod error;
pub mod numeric;
pub mod vector;
pub mod camera;
pub mod aabb;
pub mod clipping;
pub mod basepoint;
pub mod settings;
pub mod interchange;
pub mod viewpoint;
pub mod json_parser;

pub mod prelude;
