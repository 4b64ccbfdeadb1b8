mod account;
mod admin;
mod login;
mod password;
mod profile;
mod register;

pub use account::delete_account;
pub use admin::{activate, deactivate, get_one, list};
pub use login::login;
pub use password::change_password;
pub use profile::update_profile;
pub use register::register;
