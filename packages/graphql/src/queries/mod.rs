use async_graphql::MergedObject;
mod departments;
mod employees;

#[derive(MergedObject, Default)]
pub struct Queries(departments::DepartmentQueries, employees::EmployeeQueries);
