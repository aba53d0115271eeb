use serde::Deserialize;

use crate::error::AppError;
use crate::services::write::NewUser;

/// Raw registration form. Fields are optional here so that an incomplete
/// submission reaches validation instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub age: Option<String>,
}

impl SubmitForm {
    pub fn validate(self) -> Result<NewUser, AppError> {
        NewUser::parse(self.name, self.surname, self.age)
    }
}
