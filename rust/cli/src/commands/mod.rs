//! Command handlers, one module per subcommand.

pub mod cfg;
pub mod deal;
pub mod play;
pub mod score;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use score::handle_score_command;
