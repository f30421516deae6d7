mod message;
mod organization;

pub use message::*;
pub use organization::*;
