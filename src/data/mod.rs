mod loader;

pub use loader::{load_units_from_json, parse_units, LoadError};
