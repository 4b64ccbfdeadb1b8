mod create;
mod delete;
mod read;
mod status;
mod update;

pub use create::create;
pub use delete::delete;
pub use read::{get_one, get_payment_status, get_status, get_total, invoice, list_by_user};
pub use status::{cancel, deliver, set_payment_status, set_shipping_status, set_status};
pub use update::update;
