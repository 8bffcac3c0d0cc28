pub mod lyrics;
pub mod sc;
pub mod stats;
