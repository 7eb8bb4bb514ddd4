pub mod admin;
pub mod blog;
pub mod blog_article;
pub mod category;
pub mod contact;
pub mod index;
pub mod login;
pub mod not_found;
pub mod register;
