//! Windows-specific platform implementations

mod filesystem;
mod shell;

pub use filesystem::WindowsFilesystem;
pub use shell::WindowsShell;
