//! Form rendering module
//!
//! - `field_renderer`: text input and checkbox rendering
//! - `contact_form`: the contact form screen

mod contact_form;
mod field_renderer;

pub use contact_form::draw as draw_contact_form;
