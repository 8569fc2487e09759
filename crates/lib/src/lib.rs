pub mod cli;
pub mod input;
pub mod strings;

#[macro_use]
mod macros;

pub use self::input::Input;
pub use self::strings::Span;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::Input;
    pub use crate::strings::{is_digit, next_number, numbers, split, trim, Span};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use bstr::{BStr, ByteSlice};
}
