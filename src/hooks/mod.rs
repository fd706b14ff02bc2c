pub mod use_folding_panel;

pub use use_folding_panel::{use_folding_panel, FoldingPanel};
