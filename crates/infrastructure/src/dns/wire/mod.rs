pub mod encoder;
pub mod record_type_map;

pub use encoder::AnswerEncoder;
pub use record_type_map::RecordTypeMapper;
