pub mod drive;

pub use drive::DriveApi;
