pub mod filter;
pub mod roles;

pub use filter::scrub_sensitive;
pub use roles::{remap_roles, resolve_roles, ColumnRoles};
