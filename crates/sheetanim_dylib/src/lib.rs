//! Forces dynamic linking of `sheetanim` when the `dynamic_linking` feature is on.

#![allow(clippy::single_component_path_imports)]

#[allow(unused_imports)]
use sheetanim_internal;
