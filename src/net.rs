//! Network layer: a single buffered GET.

mod fetch;
mod response;

pub use fetch::fetch;
pub use response::Response;
