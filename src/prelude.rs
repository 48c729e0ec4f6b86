//! Imports the accessor traits. `use anyvalue::prelude::*` to read and write values by path
//! segment without naming each trait.

pub use crate::{
    index::Index,
    value::{JsonValueMutTrait, JsonValueTrait},
};
