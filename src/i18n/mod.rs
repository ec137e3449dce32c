//! Internationalization (i18n) module for the bilingual intake form.
//!
//! # Architecture
//!
//! - `language`: The two-variant `Language` threaded through rendering
//! - `strings`: Localized UI strings, addressable by field or by UI key
//!
//! # Example
//!
//! ```rust,ignore
//! use patient_intake::i18n::Language;
//!
//! let spanish = Language::from_code("es")?;
//! assert_eq!(spanish.toggled(), Language::English);
//! println!("{}", spanish.strings().title);
//! ```

mod language;
mod strings;

pub use language::Language;
pub use strings::{LanguageStrings, PLACEHOLDER_KEYS, TEXT_KEYS};
