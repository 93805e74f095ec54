pub mod main;
pub mod system;
pub mod translator;
pub mod utils;

pub use main::Config;
pub use system::SystemConfig;
pub use translator::TranslatorConfig;
