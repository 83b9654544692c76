use anyhow::Result;

use showcase_core::contact::{create_endpoint, ContactField, ContactForm};
use showcase_core::AppConfig;

pub async fn run(
    config: &AppConfig,
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> Result<()> {
    let endpoint = create_endpoint(&config.contact)?;

    let mut form = ContactForm::from_config(&config.contact);
    form.set_field(ContactField::Name, name);
    form.set_field(ContactField::Email, email);
    form.set_field(ContactField::Subject, subject);
    form.set_field(ContactField::Message, message);

    println!("Sending via {} endpoint...", endpoint.name());
    if let Err(e) = form.submit(endpoint.as_ref()).await {
        if !form.errors().is_empty() {
            for (field, error) in form.errors().iter() {
                eprintln!("  {}: {}", field.label(), error);
            }
        }
        return Err(e.into());
    }

    println!("Message sent successfully!");
    Ok(())
}
