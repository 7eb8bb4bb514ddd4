pub mod admin;
pub mod blog_section;
pub mod categories;
pub mod category_header;
pub mod contact_section;
pub mod footer;
pub mod form_field;
pub mod hero;
pub mod navbar;
pub mod product_card;
pub mod product_grid;
pub mod product_showcase;
pub mod toaster;
