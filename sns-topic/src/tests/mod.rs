pub mod aws;
pub mod pagination;
