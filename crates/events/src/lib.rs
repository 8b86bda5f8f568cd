//! Outbound notification delivery for the Altana configurator.
//!
//! Currently a single channel: SMTP email confirming a stored quote
//! request to the customer and announcing it to the sales inbox. Delivery
//! is fire-and-forget relative to the submission — a stored quote is
//! reported as submitted even when the email fails.

pub mod email;

pub use email::{EmailConfig, EmailError, QuoteMailer, QuoteNotification};
