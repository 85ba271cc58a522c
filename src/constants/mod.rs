pub mod sort;

pub use sort::ClanSort;
