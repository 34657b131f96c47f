//! Realtime adapters publishing board events to subscribed connections.

mod channels;

pub use channels::{BoardChannels, DEFAULT_CHANNEL_CAPACITY};
