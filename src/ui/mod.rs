//! View helpers for the checker window

pub mod theme;
pub mod url_bar;
pub mod verdict;
