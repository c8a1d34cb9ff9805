pub mod contact;
pub mod job_application;
pub mod newsletter;
pub mod onboarding;
pub mod registration;

pub use contact::contact_form;
pub use job_application::{JOB_APPLICATION_JSON, job_application};
pub use newsletter::newsletter_form;
pub use onboarding::onboarding_form;
pub use registration::registration_form;
