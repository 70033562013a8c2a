pub mod chat_view;
pub mod form_field;
pub mod input_area;
pub mod message_widget;
pub mod sign_in;
pub mod sign_up;
