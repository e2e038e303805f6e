pub mod url;

pub use url::{encode_pairs, with_query};
