
pub mod calculus;
pub mod error;
pub mod expr;
pub mod mode;
pub mod parsing;
pub mod util;

pub use calculus::{differentiate_text, differentiate_text_with_mode};
pub use error::{Error, ErrorKind};
pub use expr::Expr;
