pub mod classes;
pub mod enrollments;
