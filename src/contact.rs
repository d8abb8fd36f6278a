use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("email address looks invalid")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Form order, which is also the order fields are validated in.
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn value(self, form: &ContactForm) -> &str {
        match self {
            ContactField::Name => &form.name,
            ContactField::Email => &form.email,
            ContactField::Subject => &form.subject,
            ContactField::Message => &form.message,
        }
    }

    pub fn value_mut(self, form: &mut ContactForm) -> &mut String {
        match self {
            ContactField::Name => &mut form.name,
            ContactField::Email => &mut form.email,
            ContactField::Subject => &mut form.subject,
            ContactField::Message => &mut form.message,
        }
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = ContactField::ALL
            .into_iter()
            .find(|f| f.value(self).trim().is_empty())
        {
            return Err(ContactError::MissingField(field.name()));
        }
        if !EmailAddress::is_valid(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Accepts the form locally. Nothing leaves the browser; the submission is
    /// only logged.
    pub fn submit(&self) -> Result<(), ContactError> {
        self.validate()?;
        log::info!(
            "contact form submitted: name={:?} email={:?} subject={:?} ({} chars)",
            self.name,
            self.email,
            self.subject,
            self.message.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Project".to_string(),
            message: "Let's build something.".to_string(),
        }
    }

    #[test]
    fn test_complete_form_is_accepted() {
        assert_eq!(filled().validate(), Ok(()));
        assert_eq!(filled().submit(), Ok(()));
    }

    #[test]
    fn test_blank_fields_are_rejected_in_order() {
        assert_eq!(
            ContactForm::default().validate(),
            Err(ContactError::MissingField("name"))
        );
        let mut form = filled();
        form.subject = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactError::MissingField("subject")));
    }

    #[test]
    fn test_field_accessors() {
        let mut form = filled();
        *ContactField::Subject.value_mut(&mut form) = "Hello".to_string();
        assert_eq!(form.subject, "Hello");
        assert_eq!(ContactField::Email.value(&form), "ada@example.com");
        let names = ContactField::ALL.map(ContactField::name);
        assert_eq!(names, ["name", "email", "subject", "message"]);
    }

    #[test]
    fn test_email_shape() {
        let mut form = filled();
        let rejected = [
            "ada",
            "ada@",
            "@example.com",
            "a b@c.d",
            "a@b@c.d",
            "ada@example..com",
            "ada@example.com.",
            "ada@-example.com",
            ".ada@example.com",
        ];
        for bad in rejected {
            form.email = bad.to_string();
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
        form.email = "first.last@mail.example.org".to_string();
        assert_eq!(form.validate(), Ok(()));
        form.email = "  ada+portfolio@example.com ".to_string();
        assert_eq!(form.validate(), Ok(()));
    }
}
