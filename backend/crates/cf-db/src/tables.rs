//! Table and bucket names on the backend.

pub const PROFILES: &str = "profiles";
pub const PROJECTS: &str = "projects";
pub const COLLECTIONS: &str = "collections";

/// Bucket holding collection artwork
pub const NFT_IMAGES_BUCKET: &str = "nft-images";
