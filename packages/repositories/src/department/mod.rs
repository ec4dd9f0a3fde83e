mod create;
mod delete;
mod read;
mod update;

pub const DEPARTMENT_NOT_FOUND: &str = "Department not found";
pub const DEPARTMENT_HAS_EMPLOYEES: &str = "Department still has employees";

pub struct DepartmentRepository;
