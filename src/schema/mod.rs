pub mod infer;
pub mod validate;

pub use infer::infer_entities;
pub use validate::validate_schema;
