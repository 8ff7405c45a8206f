mod dataset;
mod one_hot;
mod schema_error;

pub use dataset::Dataset;
pub use one_hot::{EncodedColumn, OneHotEncoder};
pub use schema_error::SchemaError;
