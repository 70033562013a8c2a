pub mod form;
pub mod message;
pub mod navigation;

pub use form::{SignInField, SignInForm, SignUpField, SignUpForm};
pub use message::{Message, Role};
pub use navigation::{Destination, Notification};
