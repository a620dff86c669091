pub mod fetch;
pub mod metadata;
