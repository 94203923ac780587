//! The four-operation arithmetic engine: `add_sub`, `mult`, `div` over
//! [`decicalc_types::Number`], each digit-serial over
//! [`decicalc_util::Scratch`] registers.

mod add_sub;
mod div;
mod mult;

pub use add_sub::add_sub;
pub use div::div;
pub use mult::mult;
