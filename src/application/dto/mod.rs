//! Data Transfer Objects
//!
//! Forms pages collect and the aggregates services hand back to pages.

pub mod request;
pub mod response;

pub use request::{
    validate_campus_email, LoginForm, MembershipForm, MessageForm, OrderForm, ProfileForm,
    RegisterForm, WantedForm, CAMPUS_EMAIL_DOMAIN,
};
pub use response::{HomeFeed, PersonalOverview, WantedPosted, WantedQuota};
