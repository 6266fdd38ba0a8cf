pub(crate) mod adaptive;
pub(crate) mod bubble;
mod common;
pub(crate) mod heap;
pub(crate) mod insertion;
pub(crate) mod merge;
pub(crate) mod quick;
pub(crate) mod selection;
