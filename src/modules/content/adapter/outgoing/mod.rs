pub mod db_support;

pub use db_support::{
    json_to_strings, map_db_err, map_unique_err, reorder_rows, strings_to_json, SINGLETON_SLOT,
};
