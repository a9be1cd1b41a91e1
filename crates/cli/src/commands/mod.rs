mod apply;
mod check;
mod config;
mod describe;
mod init;

pub use apply::ApplyArgs;
pub use apply::handle_apply;
pub use check::CheckArgs;
pub use check::handle_check;
pub use config::ConfigArgs;
pub use config::handle_config;
pub use describe::DescribeArgs;
pub use describe::handle_describe;
pub use init::InitArgs;
pub use init::handle_init;
pub use init::handle_init_with_prompter;
