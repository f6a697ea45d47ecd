//! Create/edit form body

use serde::Deserialize;

use super::ValidationError;

/// Form body exactly as posted. Both fields are optional here so a
/// missing one can be reported by name instead of as a decode failure.
#[derive(Debug, Default, Deserialize)]
pub struct RawUserForm {
    pub nome: Option<String>,
    pub email: Option<String>,
}

/// Form body with both required fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
}

impl TryFrom<RawUserForm> for UserForm {
    type Error = ValidationError;

    fn try_from(raw: RawUserForm) -> Result<Self, Self::Error> {
        let name = raw
            .nome
            .ok_or(ValidationError::MissingField { field: "nome" })?;
        let email = raw
            .email
            .ok_or(ValidationError::MissingField { field: "email" })?;

        Ok(Self { name, email })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_present() {
        let raw = RawUserForm {
            nome: Some("Ana".into()),
            email: Some("a@x.com".into()),
        };
        let form = UserForm::try_from(raw).unwrap();
        assert_eq!(form.name, "Ana");
        assert_eq!(form.email, "a@x.com");
    }

    #[test]
    fn missing_name_is_reported_first() {
        let err = UserForm::try_from(RawUserForm::default()).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "nome" });
    }

    #[test]
    fn missing_email() {
        let raw = RawUserForm {
            nome: Some("Ana".into()),
            email: None,
        };
        let err = UserForm::try_from(raw).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "email" });
    }

    #[test]
    fn empty_strings_are_accepted() {
        let raw = RawUserForm {
            nome: Some(String::new()),
            email: Some(String::new()),
        };
        assert!(UserForm::try_from(raw).is_ok());
    }
}
