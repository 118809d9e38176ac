mod record_data;
mod record_type;

pub use record_data::{RecordData, MAX_HOST_TEXT};
pub use record_type::RecordType;
