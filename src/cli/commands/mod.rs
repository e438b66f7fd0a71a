pub mod config;
pub mod export;
pub mod grid;
pub mod init;
pub mod log;
pub mod mark;
pub mod student;
pub mod track;
