//! Error types for the front end.
//!
//! Two broad error classes exist: lexical errors (a character the active
//! lexical context does not recognize) and syntax errors (an unexpected
//! token or end of input during grammar reduction). A third, narrower
//! class covers the single structural violation the tokenizer treats as
//! fatal: a `template` keyword inside a struct body.
//!
//! Every error carries the source position it was raised at, so the
//! diagnostic renderer in the crate root can point at the offending line.

pub mod errors;
