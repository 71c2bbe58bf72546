//! Flutter-facing bindings for MyTodoList core.
//!
//! Dart code is generated from `api` by `flutter_rust_bridge_codegen`.

pub mod api;
