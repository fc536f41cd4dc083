pub mod lookup;
pub mod tags;
pub mod yaml;

pub use lookup::value_at;
pub use yaml::{kind_name, read_yaml_file, read_yaml_file_as, read_yaml_mapping};
