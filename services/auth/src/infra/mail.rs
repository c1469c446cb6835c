use anyhow::Context as _;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::repository::Mailer;
use crate::error::AuthServiceError;

/// SMTP mailer for outbound one-time codes.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(
        relay: &str,
        username: String,
        password: String,
        from: &str,
    ) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(relay)
            .context("build SMTP transport")?
            .credentials(Credentials::new(username, password))
            .build();
        let from = from.parse::<Mailbox>().context("parse MAIL_FROM address")?;
        Ok(Self { transport, from })
    }
}

impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), AuthServiceError> {
        let to = to
            .parse::<Mailbox>()
            .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("parse recipient: {e}")))?;
        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .body(body.to_owned())
            .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("build message: {e}")))?;
        self.transport
            .send(message)
            .await
            .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("smtp send: {e}")))?;
        Ok(())
    }
}
