//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in textmood-core.

mod error;
mod text_record;

pub use text_record::PgTextRecordRepository;
