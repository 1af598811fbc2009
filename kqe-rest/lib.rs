pub use self::client::{KialiClient, RestError};

mod client;
mod istio;
mod responses;
