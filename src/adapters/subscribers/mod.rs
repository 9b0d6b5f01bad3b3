//! SMS subscriber roster adapters.

mod in_memory;
mod yaml_file;

pub use in_memory::InMemorySubscriberReader;
pub use yaml_file::YamlSubscriberReader;
