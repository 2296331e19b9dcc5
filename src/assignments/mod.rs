#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The regular expression tutorial.
pub mod regex_tutorial;

pub use regex_tutorial::regex_tutorial;
