pub mod ordering;
pub mod resource;

pub use ordering::{check_reorder, next_order, resequence, ReorderItem};
pub use resource::{OrderedResource, Resource, SingletonResource};
