pub mod aggregator;
pub mod splitter;

pub use aggregator::aggregate;
pub use splitter::split_record;
