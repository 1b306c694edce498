mod format;
mod validate;
mod verdict;

pub use format::parse_status;
pub use validate::{ValidatedResponse, check_response};
#[allow(unused_imports)]
pub use verdict::HomeworkStatus;
