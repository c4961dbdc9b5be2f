pub mod client;
pub mod topic;
