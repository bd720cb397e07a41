use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

numeric_id!(
    /// Backend identifier of a product.
    ProductId
);
numeric_id!(
    /// Backend identifier of a producer profile.
    ProducerId
);
numeric_id!(
    /// Backend identifier of the user account behind a producer.
    /// Orders are addressed to this id, not to the profile id.
    UserId
);
numeric_id!(OrderId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_inner_value() {
        assert_eq!(ProductId::new(42).value(), 42);
    }

    #[test]
    fn should_display_id() {
        assert_eq!(format!("{}", ProducerId::new(7)), "7");
    }

    #[test]
    fn should_convert_from_u64() {
        let id: OrderId = 9.into();
        assert_eq!(id, OrderId::new(9));
    }

    #[test]
    fn should_serialize_as_plain_number() {
        let json = serde_json::to_string(&UserId::new(3)).unwrap();
        assert_eq!(json, "3");

        let parsed: ProductId = serde_json::from_str("15").unwrap();
        assert_eq!(parsed, ProductId::new(15));
    }
}
