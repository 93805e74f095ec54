pub mod interface;
pub mod wire;
pub mod client;
pub mod factory;

pub use interface::{TranslateRequest, TranslateResponse, TranslationApi};
pub use client::GoogleRapidApiClient;
pub use factory::TranslatorFactory;
