pub mod field_rules;
pub mod helper;
pub mod input_validator;
pub mod validators;
pub mod validation_result;

// Re-export common types and functions
pub use field_rules::FieldRules;
pub use helper::{
    return_success, DuplicateCheck, ExistingRecord, StoreError, UniqueField, ValidationHelper,
};
#[cfg(any(test, feature = "testing"))]
pub use helper::MockValidationHelper;
pub use input_validator::{InputValidator, ValidationErrors};
pub use validators::department_validator::{
    check_department, validate_department, DepartmentInput, ValidDepartment,
};
pub use validators::employee_validator::{
    check_employee, validate_employee, EmployeeInput, ValidEmployee,
};
pub use validation_result::{ValidationError, ValidationResult};
