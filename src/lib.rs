mod config;
mod error;
mod hash;
mod hash_map;
mod linked_list;

pub use config::{HashMapConfig, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, MIN_LOAD_FACTOR};
pub use error::ConfigError;
pub use hash::{bucket_index, string_hash, HASH_MULTIPLIER};
pub use hash_map::HashMap;
pub use linked_list::ChainedList;
