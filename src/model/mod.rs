pub mod employee;
pub mod leave_type;
