pub mod drill;
pub mod hash;
pub mod init;
pub mod validate;
