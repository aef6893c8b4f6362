use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Public view of a registered user. The password hash is never serialized.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub user_name: String,
    pub email_address: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupDto {
    pub user_name: String,
    #[serde(alias = "Password")]
    pub password: String,
    /// Accepts either a single address or a list of addresses.
    #[serde(default, deserialize_with = "deserialize_one_or_many")]
    pub email_address: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    pub user_name: String,
    #[serde(alias = "Password")]
    pub password: String,
}

fn deserialize_one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(address) => vec![address],
        OneOrMany::Many(addresses) => addresses,
    })
}
