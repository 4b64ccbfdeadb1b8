//! Per-endpoint field rule sets, evaluated before the handlers run.

use super::Check::*;
use super::FieldRule;
use super::Presence::{Optional, Required};

macro_rules! rule {
    ($field:literal, $presence:expr, $check:expr, $message:literal) => {
        FieldRule {
            field: $field,
            presence: $presence,
            check: $check,
            message: $message,
        }
    };
}

pub const REGISTER: &[FieldRule] = &[
    rule!("name", Required, NotEmpty, "Name is required"),
    rule!("email", Required, Email, "Invalid email format"),
    rule!("password", Required, MinLen(8), "Password must be at least 8 characters long"),
];

pub const LOGIN: &[FieldRule] = &[
    rule!("email", Required, Email, "Invalid email format"),
    rule!("password", Required, NotEmpty, "Password is required"),
];

pub const PROFILE_UPDATE: &[FieldRule] = &[
    rule!("name", Optional, NotEmpty, "Name is required"),
    rule!("email", Optional, Email, "Invalid email format"),
    rule!("address", Optional, NotEmpty, "Address is required"),
    rule!("phone", Optional, Phone, "Invalid phone number"),
];

pub const PASSWORD_CHANGE: &[FieldRule] = &[
    rule!("oldPassword", Required, NotEmpty, "Old password is required"),
    rule!("newPassword", Required, MinLen(8), "New password must be at least 8 characters long"),
];

pub const PRODUCT_CREATE: &[FieldRule] = &[
    rule!("name", Required, NotEmpty, "Product name is required"),
    rule!("description", Required, NotEmpty, "Description is required"),
    rule!("price", Required, Numeric, "Price must be a number"),
    rule!("price", Required, NonNegativeNumber, "Price cannot be negative"),
    rule!("quantityAvailable", Required, NonNegativeInt, "Quantity must be a non-negative integer"),
];

pub const PRODUCT_UPDATE: &[FieldRule] = &[
    rule!("name", Optional, NotEmpty, "Product name is required"),
    rule!("description", Optional, NotEmpty, "Description is required"),
    rule!("price", Optional, Numeric, "Price must be a number"),
    rule!("price", Optional, NonNegativeNumber, "Price cannot be negative"),
    rule!("quantityAvailable", Optional, NonNegativeInt, "Quantity must be a non-negative integer"),
];

pub const ORDER_CREATE: &[FieldRule] = &[
    rule!("user", Required, NotEmpty, "User is required"),
    rule!("products", Required, NonEmptyArray, "At least one product is required"),
    rule!("totalPrice", Required, Numeric, "Total price must be a number"),
    rule!("shippingAddress", Required, NotEmpty, "Shipping address is required"),
    rule!("paymentMethod", Required, NotEmpty, "Payment method is required"),
];

pub const ORDER_UPDATE: &[FieldRule] = &[
    rule!("user", Optional, NotEmpty, "User is required"),
    rule!("products", Optional, NonEmptyArray, "At least one product is required"),
    rule!("totalPrice", Optional, Numeric, "Total price must be a number"),
    rule!("shippingAddress", Optional, NotEmpty, "Shipping address is required"),
    rule!("paymentMethod", Optional, NotEmpty, "Payment method is required"),
];

pub const CART_ADD: &[FieldRule] = &[
    rule!("productId", Required, NotEmpty, "Product id is required"),
    rule!("quantity", Required, PositiveInt, "Quantity must be a positive integer"),
];

pub const CART_UPDATE: &[FieldRule] = CART_ADD;

pub const CART_REMOVE: &[FieldRule] =
    &[rule!("productId", Required, NotEmpty, "Product id is required")];
