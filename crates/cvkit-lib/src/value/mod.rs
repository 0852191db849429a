// ABOUTME: Value objects constructed only through validating factories
// ABOUTME: Email, Phone, Url and DateRange each return an Outcome from create()

pub mod date_range;
pub mod email;
pub mod phone;
pub mod url;

pub use date_range::{parse_date, DateContext, DateRange};
pub use email::Email;
pub use phone::Phone;
pub use url::Url;
