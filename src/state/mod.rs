pub mod tickers;
pub mod tween;

pub use tickers::Tickers;
pub use tween::Tween;
