pub mod classes;
pub mod enrollments;

pub use classes::ClassService;
pub use enrollments::EnrollmentService;
