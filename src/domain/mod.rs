mod error;
mod user_email;

pub use error::EmailError;
pub use user_email::Email;
