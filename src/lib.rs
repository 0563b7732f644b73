//! Password generator with entropy scoring and brute-force time estimates.
//!
//! The core is two pure steps: [`pass::charset::build`] turns a set of
//! character classes into an alphabet and [`pass::generate`] samples a
//! password from it using a caller-supplied [`rand::RandomSource`].
//!
//! ```
//! use neopass::pass::{self, ClassSet, GenerationRequest};
//! use neopass::rand::SourceKind;
//!
//! let request = GenerationRequest::new(16, ClassSet::all());
//! let mut source = SourceKind::Os.into_source();
//! let password = pass::run(&request, &mut source).unwrap();
//! assert_eq!(password.len(), 16);
//! println!("{}", pass::strength::summary(password.entropy_bits()));
//! ```

pub mod cli;
pub mod clipboard;
pub mod error;
#[cfg(unix)]
pub mod exits;
pub mod logging;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, Result};
