pub mod char_node;
pub mod table;
pub mod tail_trie;

pub use char_node::{CharNode, UNSET_FREQUENCY};
pub use table::{CharTable, CharTableBuilder, TableStats};
pub use tail_trie::TailTrie;
