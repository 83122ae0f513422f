pub mod chart_block_defaults;
pub mod chart_blocks;
pub mod departments;
pub mod extractors;
pub mod invite_codes;
pub mod roles;
pub mod use_of_force_incidents;
pub mod user_roles;
pub mod users;
