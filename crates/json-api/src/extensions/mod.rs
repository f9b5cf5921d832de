//! Handler extensions.

pub(crate) mod depot;
pub(crate) mod result;

pub(crate) use depot::*;
pub(crate) use result::*;
