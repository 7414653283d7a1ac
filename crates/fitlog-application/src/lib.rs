//! Fitlog application layer: per-user session management, transport
//! adaptation, and the message use-case tying the dialogue engine to
//! storage and the outbound ports.

pub mod adapter;
pub mod bot_service;
pub mod ports;
pub mod session;

pub use bot_service::BotService;
pub use ports::{ChartPoint, ChartRenderer, ChartSeries, ChatTransport, InboundMessage};
pub use session::SessionRegistry;
