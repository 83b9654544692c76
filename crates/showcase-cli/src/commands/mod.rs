pub mod check;
pub mod init;
pub mod list;
pub mod run;
pub mod send;
