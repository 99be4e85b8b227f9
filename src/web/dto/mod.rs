//! Form payloads accepted by the web pages.

pub mod link_form;

pub use link_form::LinkForm;
