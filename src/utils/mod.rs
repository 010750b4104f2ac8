// URL handling utilities
pub mod url_builder;
pub mod query_string;

// JSON utilities
pub mod json_converter;

pub use url_builder::join_url;
pub use query_string::build_options_query;
pub use json_converter::value_to_plain_string;
