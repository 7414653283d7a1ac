//! Outbound ports: the interfaces the transport shell and the chart
//! renderer plug into.
//!
//! The core never knows which messenger or plotting backend sits behind
//! these traits.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use fitlog_core::error::Result;
use fitlog_core::user::UserId;

/// One inbound message from the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Opaque stable identifier supplied by the transport
    pub user_id: UserId,
    /// Raw UTF-8 message text
    pub text: String,
    /// True when the transport recognized the text as a command
    /// (e.g. `/start`)
    pub is_command: bool,
}

/// Outbound messaging operations implemented by the transport shell.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Sends a text message with an ordered list of menu options.
    ///
    /// An empty option list means "keep the current menu".
    async fn send_text(&self, user_id: &UserId, text: &str, menu_options: &[String])
        -> Result<()>;

    /// Sends a rendered image with a caption.
    async fn send_image(&self, user_id: &UserId, image: Vec<u8>, caption: &str) -> Result<()>;
}

/// One point of a chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

/// A time-ordered series of (timestamp, numeric value) pairs to plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub title: String,
    pub points: Vec<ChartPoint>,
}

/// Turns a chart series into a renderable image artifact.
///
/// How pixels are drawn is entirely up to the implementation.
#[async_trait]
pub trait ChartRenderer: Send + Sync {
    async fn render(&self, series: &ChartSeries) -> Result<Vec<u8>>;
}
