mod schema;
mod seed;
mod store;
mod table;

pub use schema::ensure_schema_exists;
pub use seed::ensure_seed_data_exists;
pub use store::Store;
pub use table::{count, count_rows, delete_by_key, select_all, SqlTable};
