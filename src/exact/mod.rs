pub use subset_dp::{exact_treewidth, SubsetDp};

mod subset_dp;
