mod store_fault;
mod table_schema;

pub use store_fault::{sqlstate, StoreFault};
pub use table_schema::{SchemaError, TableSchema};
