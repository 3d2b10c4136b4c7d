//! Command handler modules for the showdown CLI.
//!
//! One module per subcommand, each exposing a single public handler:
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`. Output
//! streams are injected as `&mut dyn Write` so tests capture them.

pub mod cfg;
pub mod deal;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use sim::handle_sim_command;
