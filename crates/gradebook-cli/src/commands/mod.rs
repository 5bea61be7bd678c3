pub mod init;
pub mod session;
