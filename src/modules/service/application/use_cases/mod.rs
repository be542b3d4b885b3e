pub mod create_offering;
pub mod delete_offering;
pub mod list_offerings;
pub mod patch_offering;

use crate::shared::validation::ValidationError;

pub(crate) fn validate_price(price: f64) -> Result<f64, ValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::invalid(
            "starting_price",
            "must be zero or a positive amount",
        ));
    }
    Ok(price)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_must_be_non_negative_and_finite() {
        assert_eq!(validate_price(0.0), Ok(0.0));
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
    }
}
