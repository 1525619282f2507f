use anyhow::Result;
use folio_contact::{ContactForm, ContactSubmission, SubmitOutcome};

use crate::client::HttpSubmitter;

/// Submits one contact message through the client form, as the site would.
pub async fn run(server_url: &str, submission: ContactSubmission) -> Result<()> {
    let form = ContactForm::new(HttpSubmitter::new(server_url)?);
    form.fill(submission);

    match form.submit().await {
        SubmitOutcome::Sent(toast) => {
            println!("{}\n{}", toast.title, toast.description);
            Ok(())
        }
        SubmitOutcome::Failed(toast) => {
            anyhow::bail!("{}: {}", toast.title, toast.description)
        }
        SubmitOutcome::Invalid(errors) => {
            for (field, message) in &errors {
                eprintln!("{field}: {message}");
            }
            anyhow::bail!("{} invalid field(s), nothing was sent", errors.len())
        }
        SubmitOutcome::Busy => anyhow::bail!("a submission is already in flight"),
    }
}
