use lf_core::errors::ValidationError;
use lf_shared::validation::{is_blank, is_valid_email};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(custom = "email_format", length(max = 255))]
    pub email: String,

    /// Free-form; only presence is checked
    #[validate(length(min = 1, max = 32))]
    pub phone_number: String,
}

impl RegisterRequest {
    /// Trim every field, then validate
    ///
    /// Blank fields report `RequiredField`; a malformed email reports
    /// `InvalidFormat`.
    pub fn normalized(mut self) -> Result<Self, ValidationError> {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.phone_number = self.phone_number.trim().to_string();

        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phoneNumber", &self.phone_number),
        ] {
            if is_blank(value) {
                return Err(ValidationError::required(field));
            }
        }

        self.validate().map_err(|errors| {
            let field = errors
                .field_errors()
                .keys()
                .next()
                .map(|f| f.to_string())
                .unwrap_or_else(|| String::from("body"));
            ValidationError::invalid_format(field)
        })?;

        Ok(self)
    }
}

fn email_format(email: &str) -> Result<(), validator::ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("email"))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyOtpRequest {
    pub otp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, phone: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone_number: phone.to_string(),
        }
    }

    #[test]
    fn test_register_request_trims_fields() {
        let req = request("  Jane ", " jane@example.com ", " 555-0100")
            .normalized()
            .unwrap();
        assert_eq!(req.name, "Jane");
        assert_eq!(req.email, "jane@example.com");
        assert_eq!(req.phone_number, "555-0100");
    }

    #[test]
    fn test_register_request_blank_field() {
        let err = request("Jane", "jane@example.com", "   ").normalized().unwrap_err();
        assert_eq!(err, ValidationError::required("phoneNumber"));
    }

    #[test]
    fn test_register_request_bad_email() {
        let err = request("Jane", "not-an-email", "555").normalized().unwrap_err();
        assert_eq!(err, ValidationError::invalid_format("email"));
    }

    #[test]
    fn test_register_request_camel_case() {
        let req: RegisterRequest =
            serde_json::from_str(r#"{"name":"Jane","email":"j@x.io","phoneNumber":"1"}"#).unwrap();
        assert_eq!(req.phone_number, "1");

        let req: RegisterRequest = serde_json::from_str(r#"{"name":"Jane"}"#).unwrap();
        assert!(req.email.is_empty());
    }
}
