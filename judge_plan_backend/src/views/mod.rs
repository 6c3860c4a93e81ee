pub mod conflicts_view;

pub use self::conflicts_view::ConflictsView;
