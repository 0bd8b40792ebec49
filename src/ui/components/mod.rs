//! UI component modules
//!
//! Contains all individual rendering components

pub mod footer;
pub mod header;
pub mod logs;
pub mod statistics_panel;
pub mod student_form;
pub mod student_table;
