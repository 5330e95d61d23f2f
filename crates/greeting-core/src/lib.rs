mod assert;
mod component;
mod dom;

pub use assert::{AssertionFailure, assert_in_document};
pub use component::{Component, Hello};
pub use dom::{Node, QueryError, VirtualDocument, render};

/// Builds the greeting text for `name`.
///
/// The name is used verbatim: no trimming, no escaping and no special case
/// for the empty string, so `greet("")` is `"Hello, !"`.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}
