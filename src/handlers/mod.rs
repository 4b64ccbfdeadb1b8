pub mod cart;
pub mod orders;
pub mod products;
pub mod users;

use uuid::Uuid;

use crate::error::ApiError;

/// Parse a path identifier, mapping malformed input to a handled 400 instead
/// of letting it reach the database layer.
pub(crate) fn parse_id(raw: &str, resource: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request(format!("Invalid {} id", resource)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_ids_parse() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "order").unwrap(), id);
    }

    #[test]
    fn malformed_ids_are_handled_errors() {
        let err = parse_id("not-a-uuid", "order").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Invalid order id");
    }
}
