mod message_repo_mysql;

pub use message_repo_mysql::*;

mod util;
