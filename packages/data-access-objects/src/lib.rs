pub mod department;
pub mod employee;

pub use department::DepartmentDao;
pub use employee::EmployeeDao;
