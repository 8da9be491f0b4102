pub mod adaptors;
pub mod auth;
pub mod blobstore;
pub mod skills;
pub mod workflow;
