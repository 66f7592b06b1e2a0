/// Subject line and both renderings of a newsletter body.
#[derive(Debug, Clone, Copy)]
pub struct NewsletterContent<'a> {
    pub subject: &'a str,
    pub html: &'a str,
    pub text: &'a str,
}

impl<'a> NewsletterContent<'a> {
    pub fn new(subject: &'a str, html: &'a str, text: &'a str) -> Self {
        Self {
            subject,
            html,
            text,
        }
    }
}
