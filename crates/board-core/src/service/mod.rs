//! Application services - the lifecycle rules on top of the ports.

mod post;

pub use post::PostService;
