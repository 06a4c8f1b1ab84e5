#![allow(ambiguous_glob_reexports)]

pub mod accept_platform_authority;
pub mod initialize_creator;
pub mod initialize_platform_config;
pub mod send_tip;
pub mod transfer_platform_authority;
pub mod update_platform_fee;
pub mod withdraw_tips;

pub use accept_platform_authority::*;
pub use initialize_creator::*;
pub use initialize_platform_config::*;
pub use send_tip::*;
pub use transfer_platform_authority::*;
pub use update_platform_fee::*;
pub use withdraw_tips::*;
