use async_graphql::MergedObject;
mod departments;
mod employees;

#[derive(MergedObject, Default)]
pub struct Mutations(
    departments::DepartmentMutation,
    employees::EmployeeMutation,
);
