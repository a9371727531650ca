//! Data model: the immutable parsed document and the selections taken from it

pub mod document;
pub mod node_set;

pub use document::Document;
pub use node_set::NodeSet;
