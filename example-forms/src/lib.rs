//! Example surveys built through the surveyforge editor API.
//!
//! Each builder drives a [`SurveyStore`](surveyforge::SurveyStore) the way
//! an editor session would, and hands back the resulting survey. Used as
//! fixtures by the other crates' tests and examples.

pub mod customer_feedback;
pub mod event_registration;

pub use customer_feedback::customer_feedback;
pub use event_registration::event_registration;
