pub mod resource;

pub use resource::{MergeIntoActiveModel, Resource};
