mod create;
mod delete;
mod read;
mod update;

use models::employees;
use sea_orm::*;
use services::ValidEmployee;

pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";

pub struct EmployeeRepository;

/// Copies every validated field onto `am`.
fn apply(am: &mut employees::ActiveModel, employee: ValidEmployee) {
    am.first_name = ActiveValue::set(employee.first_name);
    am.last_name = ActiveValue::set(employee.last_name);
    am.title = ActiveValue::set(employee.title);
    am.email = ActiveValue::set(employee.email);
    am.country_code = ActiveValue::set(employee.country_code);
    am.phone_number = ActiveValue::set(employee.phone_number);
    am.is_active = ActiveValue::set(employee.is_active);
    am.department_id = ActiveValue::set(employee.department_id);
    am.hire_date = ActiveValue::set(employee.hire_date);
}
