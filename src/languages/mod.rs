pub mod normalize;
pub mod map;

pub use normalize::{code_to_name, normalize_code, SPECIAL_CASES};
pub use map::{LanguageEntry, LanguageNames};
