/// State management module
///
/// This module handles all application state, including:
/// - The controller state machine for pick/filter/save (editor.rs)
/// - The mono filter parameters and transform (edit.rs)
/// - The save catalog database and library writes (library.rs)
/// - Shared data structures (data.rs)

pub mod data;
pub mod edit;
pub mod editor;
pub mod library;
