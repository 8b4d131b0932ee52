pub mod chain;
pub mod resolve;
pub mod rewrite;
pub mod table;

pub use chain::{chain, chain_str};
pub use resolve::{resolve, resolve_with_draw, select};
pub use rewrite::{generations, rewrite, rewrite_once, rewrite_str, Generations};
pub use table::RuleTable;
