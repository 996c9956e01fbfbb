mod file;
pub mod sendgrid;

pub use file::FileTransport;
pub use sendgrid::{DEFAULT_SENDGRID_URL, SendGridTransport};
