mod add;
mod remove;
mod update;

pub use add::add;
pub use remove::remove;
pub use update::update;
