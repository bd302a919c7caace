//! Domain entities - core business objects

mod text_record;

pub use text_record::TextRecord;
