//! Command implementations.

pub mod delete;
pub mod entity;
pub mod list;
pub mod matchers;
pub mod review;
pub mod run;
pub mod show;

pub use self::delete::execute_delete;
pub use self::entity::execute_for;
pub use self::list::execute_list;
pub use self::matchers::execute_matchers;
pub use self::review::execute_review;
pub use self::run::execute_match;
pub use self::show::execute_show;
