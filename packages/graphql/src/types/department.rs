use async_graphql::{InputObject, SimpleObject};
use models::departments;
use services::DepartmentInput;

#[derive(SimpleObject, Clone, Debug)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub location: String,
}

impl From<departments::Model> for Department {
    fn from(d: departments::Model) -> Self {
        Department {
            id: d.id,
            name: d.name,
            code: d.code,
            location: d.location,
        }
    }
}

#[derive(SimpleObject)]
pub struct SavedDepartment {
    pub message: String,
    pub record: Department,
}

/// Department fields as submitted; every field may be missing.
#[derive(InputObject, Default)]
#[graphql(name = "DepartmentInput")]
pub struct DepartmentFields {
    pub name: Option<String>,
    pub code: Option<String>,
    pub location: Option<String>,
}

impl From<DepartmentFields> for DepartmentInput {
    fn from(fields: DepartmentFields) -> Self {
        DepartmentInput {
            name: fields.name,
            code: fields.code,
            location: fields.location,
        }
    }
}
