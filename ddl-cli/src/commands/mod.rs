mod check;
mod convert;
mod crud;
mod describe;
mod detect;
mod init_config;
mod input;

// Input loading
pub use input::load_tables;

// Conversion commands
pub use convert::run_convert;
pub use detect::run_detect;

// Mapping commands
pub use check::run_check;

// Generation commands
pub use crud::run_crud;
pub use describe::run_describe;

// Config commands
pub use init_config::run_init_config;
