//! Entity to model mappers
//!
//! - `From<Model> for Entity`: convert database rows to domain objects
//! - `*Insert` structs: prepare entity data for database writes

mod text_record;

pub use text_record::TextRecordInsert;
