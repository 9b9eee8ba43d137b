pub mod retry;
pub mod validate;

pub use retry::{RetryPolicy, retry_with_backoff};
pub use validate::{validate_enrollment_code, validate_student_id};
