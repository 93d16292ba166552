//! Browser plumbing for the login screen: the `token` cookie and
//! cancellable request tasks.

pub mod cookie;
pub mod task;
