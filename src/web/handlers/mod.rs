//! Handlers for the link pages.

mod links;
mod schema;

pub use links::{
    EditTemplate, LinksTemplate, add_link_handler, delete_link_handler, edit_form_handler,
    index_handler, update_link_handler,
};
pub use schema::create_table_handler;
