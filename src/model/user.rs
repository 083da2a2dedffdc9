use super::{Record, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Uppercased first letter of the name, used for avatars.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('U')
    }
}

impl Record for User {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    Client,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(r#""admin""#, Role::Admin; "admin")]
    #[test_case(r#""client""#, Role::Client; "client")]
    #[test_case(r#""staff""#, Role::Client; "unknown role")]
    fn role(json: &str, expected: Role) {
        assert_eq!(serde_json::from_str::<Role>(json).unwrap(), expected);
    }

    #[test_case("maria", 'M'; "lowercase name")]
    #[test_case("Élida", 'É'; "accented name")]
    #[test_case("", 'U'; "empty name")]
    fn initial(name: &str, expected: char) {
        let user = User {
            name: name.to_owned(),
            ..Default::default()
        };
        assert_eq!(user.initial(), expected);
    }
}
