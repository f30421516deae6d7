mod message_service_impl;

pub use message_service_impl::*;
