//! Database models - SQLx-compatible structs for PostgreSQL tables

mod text_record;

pub use text_record::TextRecordModel;
