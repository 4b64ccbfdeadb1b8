mod create;
mod delete;
mod listings;
mod read;
mod update;

pub use create::create;
pub use delete::delete;
pub use listings::{categories, list, related, search, similar};
pub use read::get_one;
pub use update::update;
