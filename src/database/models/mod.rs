pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{Cart, CartItem};
pub use order::{NewOrder, Order, OrderItem, OrderPatch, StatusField};
pub use product::{NewProduct, Product, ProductPatch};
pub use user::{NewUser, ProfilePatch, User};
