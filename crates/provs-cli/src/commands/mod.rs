pub mod init;
pub mod misc;
pub mod records;
pub mod secret;
pub mod seed;
