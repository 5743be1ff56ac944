pub mod catalog;
pub mod pay;
pub mod select;
pub mod summary;
