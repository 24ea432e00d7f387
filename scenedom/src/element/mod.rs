mod id;
mod iter;
mod tree;

pub use id::{ElementId, Parent};
pub use iter::{Ancestors, Descendants};
pub use tree::ElementTree;
