//! View state machines
//!
//! Each view owns its data for the lifetime of one visit and knows nothing
//! about the other views.

pub mod create;
pub mod list;
pub mod statistics;

pub use create::{CreateForm, Field};
pub use list::StudentListView;
pub use statistics::StatisticsView;

/// The views the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumIter)]
pub enum Tab {
    #[default]
    #[strum(to_string = "Student List")]
    List,
    #[strum(to_string = "Add Student")]
    Create,
    #[strum(to_string = "Statistics")]
    Statistics,
}

impl Tab {
    pub fn index(self) -> usize {
        match self {
            Tab::List => 0,
            Tab::Create => 1,
            Tab::Statistics => 2,
        }
    }
}

/// `Loading → {Ready, Failed}` for a single fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Load<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Load<T> {
    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        matches!(self, Load::Loading)
    }
}
