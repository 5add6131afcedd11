mod column;
mod update_request;

pub use column::*;
pub use update_request::*;
