pub mod category;

pub use category::{find_node, CategoryNode, Forest};
