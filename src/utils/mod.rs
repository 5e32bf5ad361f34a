pub mod error;
pub mod format;
pub mod image;
pub mod output;
pub mod pagination;

pub use error::{AppError, AppResult};
pub use output::{DisplayFormatter, OutputStyle, handle_not_found};
