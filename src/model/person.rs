use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub roles: Vec<RoleDto>,
    pub dependents: Vec<DependentDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonDto {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    #[serde(default)]
    pub roles: Vec<RoleDto>,
    #[serde(default)]
    pub dependents: Vec<DependentDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoleDto {
    pub text: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DependentDto {
    pub first_name: String,
    pub last_name: String,
}
