//! A plain record with renamed and skipped fields.

use alike_macros::Describe;
use alike_value::{Describe as _, Value};

#[derive(Describe)]
#[describe(name = "User")]
pub struct User {
    pub id: u64,
    #[describe(rename = "displayName")]
    pub name: String,
    #[describe(skip)]
    pub session: Option<String>,
}

fn main() {
    let user = User {
        id: 7,
        name: "ada".to_owned(),
        session: None,
    };
    let value = user.describe();
    assert_eq!(value.type_name(), "User");
    assert_eq!(value.member("id"), Some(Value::uint(7)));
    assert_eq!(value.member("displayName"), Some(Value::string("ada")));
    assert_eq!(value.member("session"), None);
}
