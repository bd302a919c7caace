//! TwiML reply documents

use quick_xml::escape::escape;

/// XML declaration prefixed to every document
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Content type of a TwiML reply
pub const CONTENT_TYPE: &str = "application/xml";

/// A response that replies with one message
pub fn message_response(message: &str) -> String {
    format!("{XML_DECLARATION}<Response><Message>{}</Message></Response>", escape(message))
}
