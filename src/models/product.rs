use serde::{Deserialize, Serialize, Serializer};

/// Product payload accepted and echoed by the intake endpoint.
///
/// Field declaration order is part of the contract: it is the order the
/// validator walks the fields and the order they appear in responses.
/// Missing JSON fields decode to their zero values (serde `default`) so the
/// validator reports them through the `required` rule instead of the decode
/// step failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    pub currency: String,
}

/// Whole prices print without a trailing `.0` (`10`, not `10.0`); fractional
/// prices keep their shortest form (`1.5`).
fn serialize_price<S>(price: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if price.fract() == 0.0 && price.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: 1,
            name: "Some name".to_string(),
            description: "Some description".to_string(),
            price: 1.5,
            currency: "EUR".to_string(),
        }
    }

    // ── Encoding ───────────────────────────────────────────────────────────────

    #[test]
    fn encodes_fields_in_declaration_order() {
        assert_eq!(
            serde_json::to_string(&sample()).unwrap(),
            r#"{"id":1,"name":"Some name","description":"Some description","price":1.5,"currency":"EUR"}"#
        );
    }

    #[test]
    fn whole_price_encodes_without_decimal_point() {
        let mut p = sample();
        p.price = 10.0;
        assert_eq!(
            serde_json::to_string(&p).unwrap(),
            r#"{"id":1,"name":"Some name","description":"Some description","price":10,"currency":"EUR"}"#
        );
    }

    #[test]
    fn fractional_price_keeps_shortest_form() {
        let mut p = sample();
        p.price = 99.99;
        assert!(serde_json::to_string(&p).unwrap().contains(r#""price":99.99"#));
    }

    #[test]
    fn empty_description_still_appears_in_output() {
        let mut p = sample();
        p.description = String::new();
        assert!(serde_json::to_string(&p).unwrap().contains(r#""description":""#));
    }

    // ── Decoding ───────────────────────────────────────────────────────────────

    #[test]
    fn missing_fields_decode_to_zero_values() {
        let p: Product = serde_json::from_str("{}").unwrap();
        assert_eq!(p, Product::default());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let p: Product = serde_json::from_str(r#"{"id":7,"stock":42}"#).unwrap();
        assert_eq!(p.id, 7);
    }

    #[test]
    fn wrong_typed_id_is_a_decode_error() {
        assert!(serde_json::from_str::<Product>(r#"{"id":"1"}"#).is_err());
    }

    #[test]
    fn integer_price_decodes_as_float() {
        let p: Product = serde_json::from_str(r#"{"price":2}"#).unwrap();
        assert_eq!(p.price, 2.0);
    }
}
