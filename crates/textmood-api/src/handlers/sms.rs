//! Inbound SMS webhook

use axum::extract::State;
use textmood_service::{InboundSms, SmsService};

use crate::extractors::{WebhookForm, WebhookKey};
use crate::response::{ApiResult, Twiml};
use crate::state::AppState;

/// Score, store and announce an inbound message, replying with its mood
///
/// POST /api/sms
pub async fn receive_sms(
    State(state): State<AppState>,
    _key: WebhookKey,
    WebhookForm(sms): WebhookForm<InboundSms>,
) -> ApiResult<Twiml> {
    let reply = SmsService::new(state.service_context())
        .handle_inbound(sms)
        .await?;

    Ok(Twiml(reply.to_twiml()))
}
