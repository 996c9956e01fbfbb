mod contact_templates;

pub use contact_templates::{ContactHtmlTemplate, ContactTextTemplate};
