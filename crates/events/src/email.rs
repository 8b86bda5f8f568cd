//! Quote notification emails via SMTP.
//!
//! [`QuoteMailer`] wraps the `lettre` async SMTP transport to send two
//! plain-text emails per stored quote: a confirmation to the customer and
//! a notification to the sales inbox. Configuration is loaded from
//! environment variables; if `SMTP_HOST` is not set,
//! [`EmailConfig::from_env`] returns `None` and no mailer should be
//! constructed.

use altana_core::types::EntityId;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@altana.local";

/// Default sales inbox when `QUOTE_INBOX` is not set.
const DEFAULT_QUOTE_INBOX: &str = "quotes@altana.local";

/// Configuration for the SMTP email delivery service.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Sales inbox that receives a copy of every quote request.
    pub quote_inbox: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and should be skipped.
    ///
    /// | Variable        | Required | Default                 |
    /// |-----------------|----------|-------------------------|
    /// | `SMTP_HOST`     | yes      | —                       |
    /// | `SMTP_PORT`     | no       | `587`                   |
    /// | `SMTP_FROM`     | no       | `noreply@altana.local`  |
    /// | `QUOTE_INBOX`   | no       | `quotes@altana.local`   |
    /// | `SMTP_USER`     | no       | —                       |
    /// | `SMTP_PASSWORD` | no       | —                       |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            quote_inbox: std::env::var("QUOTE_INBOX")
                .unwrap_or_else(|_| DEFAULT_QUOTE_INBOX.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// QuoteNotification
// ---------------------------------------------------------------------------

/// Everything the mailer needs about a freshly stored quote.
#[derive(Debug, Clone)]
pub struct QuoteNotification {
    pub quote_id: EntityId,
    /// `metal` or `wood`; shown in the subject line.
    pub product_line: String,
    pub customer_name: String,
    pub customer_email: String,
    /// Pre-rendered plain-text configuration summary.
    pub summary: String,
}

// ---------------------------------------------------------------------------
// QuoteMailer
// ---------------------------------------------------------------------------

/// Sends quote request emails via SMTP.
pub struct QuoteMailer {
    config: EmailConfig,
}

impl QuoteMailer {
    /// Create a new mailer with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Send the customer confirmation and the sales notification for a
    /// stored quote.
    ///
    /// The two sends run in sequence; the first failure is returned.
    /// Callers treat any failure as log-only — the quote is already
    /// durable at this point.
    pub async fn send_quote_emails(
        &self,
        notification: &QuoteNotification,
    ) -> Result<(), EmailError> {
        let customer_subject = "Your quote request has been received".to_string();
        let customer_body = format!(
            "Dear {},\n\nThank you for your request. Our team will get back to you \
             with a detailed quote.\n\nYour configuration:\n{}\n\nReference: {}\n",
            notification.customer_name, notification.summary, notification.quote_id
        );
        self.send(
            &notification.customer_email,
            customer_subject,
            customer_body,
        )
        .await?;

        let inbox_subject = format!(
            "[Altana] New {} quote request {}",
            notification.product_line, notification.quote_id
        );
        let inbox_body = format!(
            "Customer: {} <{}>\n\nConfiguration:\n{}\n",
            notification.customer_name, notification.customer_email, notification.summary
        );
        self.send(&self.config.quote_inbox, inbox_subject, inbox_body)
            .await?;

        tracing::info!(
            quote_id = %notification.quote_id,
            to = %notification.customer_email,
            "Quote emails sent"
        );
        Ok(())
    }

    async fn send(&self, to: &str, subject: String, body: String) -> Result<(), EmailError> {
        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials,
            AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
        };

        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
