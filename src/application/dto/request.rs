//! Request DTOs
//!
//! Form data collected by pages before it becomes a request body. Each form
//! validates on the client first; error codes double as translation keys.

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::{
    Credentials, ProfileUpdate, Registration, MAX_CART_QUANTITY, MAX_MEMBERSHIP_MONTHS,
    MIN_CART_QUANTITY, MIN_MEMBERSHIP_MONTHS,
};

/// Suffix every registration email must carry.
pub const CAMPUS_EMAIL_DOMAIN: &str = "@ait.ac.th";

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_username(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(invalid("auth.register.usernameRequired", "Username is required"));
    }
    if value.chars().count() < 3 {
        return Err(invalid(
            "auth.register.usernameTooShort",
            "Username must be at least 3 characters",
        ));
    }
    Ok(())
}

fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(invalid("auth.register.passwordRequired", "Password is required"));
    }
    if value.chars().count() < 8 {
        return Err(invalid(
            "auth.register.passwordTooShort",
            "Password must be at least 8 characters",
        ));
    }
    Ok(())
}

/// Required first, then equal to `password`.
fn validate_confirm_password(value: &str, password: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(invalid(
            "auth.register.confirmPasswordRequired",
            "Please confirm your password",
        ));
    }
    if value != password {
        return Err(invalid("auth.register.passwordsNotMatch", "Passwords do not match"));
    }
    Ok(())
}

/// Campus emails only.
pub fn validate_campus_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(invalid("auth.register.emailRequired", "Email is required"));
    }
    if !value.ends_with(CAMPUS_EMAIL_DOMAIN) {
        return Err(invalid("auth.register.emailInvalid", "Email must end with @ait.ac.th"));
    }
    Ok(())
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("required", "This field is required"));
    }
    Ok(())
}

/// Login form
#[derive(Debug, Clone, Default, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, code = "auth.login.usernameRequired", message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, code = "auth.login.passwordRequired", message = "Password is required"))]
    pub password: String,
}

impl LoginForm {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

/// Registration form
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// One error per field. The confirmation depends on `password`, so the
/// checks are written out instead of derived.
impl Validate for RegisterForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let checks = [
            ("username", validate_username(&self.username)),
            ("email", validate_campus_email(&self.email)),
            ("password", validate_password(&self.password)),
            (
                "confirm_password",
                validate_confirm_password(&self.confirm_password, &self.password),
            ),
        ];

        for (field, result) in checks {
            if let Err(e) = result {
                errors.add(field, e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl RegisterForm {
    /// Build a form; a missing confirmation repeats the password.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: Option<String>,
    ) -> Self {
        let password = password.into();
        Self {
            username: username.into(),
            email: email.into(),
            confirm_password: confirm_password.unwrap_or_else(|| password.clone()),
            password,
        }
    }

    pub fn registration(&self) -> Registration {
        Registration {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// Profile edit form. Username and email are read-only on the server.
#[derive(Debug, Clone, Default, Validate)]
pub struct ProfileForm {
    #[validate(length(max = 150, code = "personal.firstNameTooLong", message = "First name is too long"))]
    pub first_name: Option<String>,

    #[validate(length(max = 150, code = "personal.lastNameTooLong", message = "Last name is too long"))]
    pub last_name: Option<String>,

    #[validate(length(max = 50, code = "personal.phoneTooLong", message = "Phone must be at most 50 characters"))]
    pub phone: Option<String>,

    pub bio: Option<String>,
}

impl ProfileForm {
    pub fn update(&self) -> ProfileUpdate {
        ProfileUpdate {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            bio: self.bio.clone(),
        }
    }
}

/// Checkout form (`POST orders/`).
#[derive(Debug, Clone, Validate)]
pub struct OrderForm {
    pub item: i64,

    #[validate(range(
        min = MIN_CART_QUANTITY,
        max = MAX_CART_QUANTITY,
        code = "cart.quantityInvalid",
        message = "Quantity must be between 1 and 99"
    ))]
    pub quantity: u32,

    pub shipping_address: String,

    pub notes: String,
}

/// Chat composer.
#[derive(Debug, Clone, Validate)]
pub struct MessageForm {
    #[validate(range(min = 1, code = "chat.receiverRequired", message = "Receiver ID is required"))]
    pub receiver: i64,

    #[validate(custom(function = "validate_message_text"))]
    pub text: String,

    pub item: Option<i64>,
}

fn validate_message_text(value: &str) -> Result<(), ValidationError> {
    validate_not_blank(value)
        .map_err(|_| invalid("chat.messageRequired", "Message cannot be empty"))
}

/// New wanted post form; prices are raw text as typed.
#[derive(Debug, Clone, Default, Validate)]
pub struct WantedForm {
    #[validate(
        custom(function = "validate_wanted_title"),
        length(max = 200, code = "wanted.titleTooLong", message = "Title must be at most 200 characters")
    )]
    pub title: String,

    pub description: String,

    pub max_price: String,

    #[validate(length(max = 100, code = "wanted.categoryTooLong", message = "Category must be at most 100 characters"))]
    pub category: String,

    pub condition_preference: String,

    #[validate(length(max = 50, code = "wanted.phoneTooLong", message = "Phone must be at most 50 characters"))]
    pub contact_phone: String,

    #[validate(length(max = 200, code = "wanted.locationTooLong", message = "Location must be at most 200 characters"))]
    pub location: String,
}

fn validate_wanted_title(value: &str) -> Result<(), ValidationError> {
    validate_not_blank(value).map_err(|_| invalid("wanted.titleRequired", "Title is required"))
}

/// Membership purchase.
#[derive(Debug, Clone, Copy, Validate)]
pub struct MembershipForm {
    #[validate(range(
        min = MIN_MEMBERSHIP_MONTHS,
        max = MAX_MEMBERSHIP_MONTHS,
        code = "personal.membership.monthsInvalid",
        message = "Months must be between 1 and 12"
    ))]
    pub months: u32,
}
