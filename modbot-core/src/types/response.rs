//! Handler chain result type.

/// Handler result for the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; the message was dealt with.
    Stop,
    /// The handler does not apply to this message; try next.
    Ignore,
    /// Stop the chain and attach the text that was sent back.
    Reply(String),
}
