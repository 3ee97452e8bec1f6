//! Domain logic - pure release rules independent of shell and git

pub mod mode;
pub mod tag;
pub mod version;

pub use mode::ReleaseMode;
pub use tag::PublishTag;
pub use version::ReleaseVersion;
