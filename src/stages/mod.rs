pub mod stage0_normalize;
pub mod stage1_lexical;
pub mod stage2_organize;
pub mod stage3_polish;

pub use stage0_normalize::*;
pub use stage1_lexical::*;
pub use stage2_organize::*;
pub use stage3_polish::*;
