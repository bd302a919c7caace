//! Inbound SMS service
//!
//! Scores an inbound text, stores and announces it, and builds the reply.
//! Only a missing body fails the request; every downstream failure is
//! logged and the reply is still sent.

use tracing::{error, info, instrument, warn};

use textmood_core::{sentiment_emoji, SentimentScore, TextRecord};

use crate::dto::InboundSms;
use crate::twiml;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reply prefix sent back to the texter
pub const REPLY_PREFIX: &str = "Text Sentiment:";

/// Outcome of handling one inbound message
#[derive(Debug, Clone)]
pub struct SmsReply {
    /// The record created for the message
    pub record: TextRecord,
    /// Plain-text reply, e.g. `Text Sentiment: 😃`
    pub message: String,
}

impl SmsReply {
    /// Build the reply for a scored record
    pub fn for_record(record: TextRecord) -> Self {
        let message = format!("{REPLY_PREFIX} {}", sentiment_emoji(record.sentiment_score));
        Self { record, message }
    }

    /// Render the reply as a TwiML document
    pub fn to_twiml(&self) -> String {
        twiml::message_response(&self.message)
    }
}

/// Inbound SMS service
pub struct SmsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SmsService<'a> {
    /// Create a new SmsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Handle one inbound message
    ///
    /// # Errors
    /// Fails only when the message has no usable body.
    #[instrument(skip(self, sms), fields(message_sid = sms.message_sid.as_deref().unwrap_or("-")))]
    pub async fn handle_inbound(&self, sms: InboundSms) -> ServiceResult<SmsReply> {
        info!("Text message received");

        let text = sms.text()?.to_string();

        let score = self.score(&text).await;
        let record = TextRecord::new(text, score);

        if let Err(e) = self.ctx.text_record_repo().create(&record).await {
            error!(record_id = %record.id, error = %e, "Failed to store text record");
        }

        if let Err(e) = self.ctx.announcer().announce_created(&record).await {
            warn!(record_id = %record.id, error = %e, "Failed to announce text record");
        }

        let reply = SmsReply::for_record(record);
        info!(
            record_id = %reply.record.id,
            score = %reply.record.sentiment_score,
            reply = %reply.message,
            "Sending reply"
        );

        Ok(reply)
    }

    /// Score `text`, degrading to the unknown sentinel on any failure
    async fn score(&self, text: &str) -> SentimentScore {
        match self.ctx.sentiment_analyzer().score(text).await {
            Ok(score) => SentimentScore::from_option(score),
            Err(e) => {
                warn!(error = %e, "Sentiment analysis failed");
                SentimentScore::UNKNOWN
            }
        }
    }
}
