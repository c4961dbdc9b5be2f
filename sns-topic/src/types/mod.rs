pub mod params;
pub mod subscription;
