pub mod interface;
pub mod websocket_host;

pub use interface::EditorHost;
pub use websocket_host::{Outbound, PendingPrompts, WebSocketHost};
