pub mod collection;
pub mod idea;
pub mod view;
