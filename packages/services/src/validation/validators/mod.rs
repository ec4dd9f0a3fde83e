pub mod department_validator;
pub mod employee_validator;
