use askama::Template;

/// HTML body of the owner notification. Askama escapes every field; the message
/// is split on newlines so each break becomes a literal `<br>`.
#[derive(Template)]
#[template(
    source = r#"<h2>New Contact Form Submission</h2>
<p><strong>Name:</strong> {{ name }}</p>
<p><strong>Email:</strong> {{ email }}</p>
<p><strong>Subject:</strong> {{ subject }}</p>
<hr>
<p><strong>Message:</strong></p>
<p>{% for line in message_lines %}{{ line }}{% if !loop.last %}<br>{% endif %}{% endfor %}</p>"#,
    ext = "html"
)]
pub struct ContactHtmlTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message_lines: Vec<&'a str>,
}

impl<'a> ContactHtmlTemplate<'a> {
    pub fn new(name: &'a str, email: &'a str, subject: &'a str, message: &'a str) -> Self {
        Self {
            name,
            email,
            subject,
            message_lines: message.split('\n').collect(),
        }
    }
}

#[derive(Template)]
#[template(
    source = "Name: {{ name }}\nEmail: {{ email }}\n\nMessage:\n{{ message }}",
    ext = "txt"
)]
pub struct ContactTextTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}
