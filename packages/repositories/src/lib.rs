pub mod department;
pub mod employee;
pub mod validation_helper;

pub use department::DepartmentRepository;
pub use employee::EmployeeRepository;
pub use validation_helper::StoreValidationHelper;

#[cfg(test)]
mod test_helpers;
