pub mod columns;
pub mod fetch;
pub mod format;
pub mod site;
pub mod table;
