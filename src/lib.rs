//! # BASIC
//!
//! A line-numbered BASIC interpreter.
//!
//! Run the `basic` executable for an interactive session, or give it
//! a file of numbered lines to run. If you get the following, you have
//! achieved success.
//! ```text
//! READY.
//! █
//! ```
//!
//! The library drives the same engine: feed lines to a
//! [`Runtime`](mach/struct.Runtime.html) and print the events it returns.
//! ```
//! use basic::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::default();
//! runtime.enter("10 FOR I=1 TO 3:PRINT I;:NEXT I");
//! runtime.enter("RUN");
//! let mut out = String::new();
//! loop {
//!     match runtime.execute(5000) {
//!         Event::Print(s) => out.push_str(&s),
//!         Event::Stopped => break,
//!         _ => {}
//!     }
//! }
//! assert_eq!(out, "123");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

#[path = "doc/appendix_c.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_C;

pub mod lang;
pub mod mach;

#[doc(hidden)]
pub mod term;
