use chrono::NaiveDate;
use uuid::Uuid;

use crate::services::prediction::Outlook;

/// Raw form fields for the goods screen, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoodsForm {
    pub goods_id: String,
    pub goods_name: String,
    pub cost: String,
    pub price: String,
    pub date: String,
    pub supplier_id: String,
    pub supplier_name: String,
}

/// A goods entry that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidGoods {
    pub goods_id: String,
    pub goods_name: String,
    pub cost: f64,
    pub price: f64,
    pub date: NaiveDate,
    pub supplier_id: String,
    pub supplier_name: String,
}

/// A stored record with its (stubbed) outlook attached at submit time.
#[derive(Debug, Clone, PartialEq)]
pub struct GoodsRecord {
    pub id: Uuid,
    pub goods: ValidGoods,
    pub outlook: Outlook,
}

impl GoodsForm {
    /// Required-field, numeric and cost-vs-price checks, in form order.
    /// Every violated rule contributes one message.
    pub fn validate(&self) -> Result<ValidGoods, Vec<String>> {
        let mut errors = Vec::new();

        if self.goods_id.trim().is_empty() {
            errors.push("Goods ID is required".to_string());
        }
        if self.goods_name.trim().is_empty() {
            errors.push("Goods Name is required".to_string());
        }
        if self.cost.trim().is_empty() {
            errors.push("Cost is required".to_string());
        }
        if self.price.trim().is_empty() {
            errors.push("Price is required".to_string());
        }
        if self.date.trim().is_empty() {
            errors.push("Date is required".to_string());
        }
        if self.supplier_id.trim().is_empty() {
            errors.push("Supplier ID is required".to_string());
        }
        if self.supplier_name.trim().is_empty() {
            errors.push("Supplier Name is required".to_string());
        }

        let cost = match self.cost.trim() {
            "" => None,
            raw => match raw.parse::<f64>() {
                Ok(v) => Some(v),
                Err(_) => {
                    errors.push("Cost must be a number".to_string());
                    None
                }
            },
        };
        let price = match self.price.trim() {
            "" => None,
            raw => match raw.parse::<f64>() {
                Ok(v) => Some(v),
                Err(_) => {
                    errors.push("Price must be a number".to_string());
                    None
                }
            },
        };
        if let (Some(cost), Some(price)) = (cost, price) {
            if cost > price {
                errors.push("Cost cannot be greater than price".to_string());
            }
        }

        let date = match self.date.trim() {
            "" => None,
            raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(d) => Some(d),
                Err(_) => {
                    errors.push("Date must be a valid date (YYYY-MM-DD)".to_string());
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidGoods {
            goods_id: self.goods_id.trim().to_string(),
            goods_name: self.goods_name.trim().to_string(),
            cost: cost.unwrap_or_default(),
            price: price.unwrap_or_default(),
            date: date.unwrap_or_default(),
            supplier_id: self.supplier_id.trim().to_string(),
            supplier_name: self.supplier_name.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> GoodsForm {
        GoodsForm {
            goods_id: "G-1".to_string(),
            goods_name: "Widget".to_string(),
            cost: "5.0".to_string(),
            price: "9.5".to_string(),
            date: "2024-03-01".to_string(),
            supplier_id: "S-1".to_string(),
            supplier_name: "Acme".to_string(),
        }
    }

    #[test]
    fn a_complete_form_validates() {
        let valid = filled_form().validate().unwrap();
        assert_eq!(valid.cost, 5.0);
        assert_eq!(valid.price, 9.5);
        assert_eq!(valid.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn every_empty_required_field_is_reported() {
        let errors = GoodsForm::default().validate().unwrap_err();
        for expected in [
            "Goods ID is required",
            "Goods Name is required",
            "Cost is required",
            "Price is required",
            "Date is required",
            "Supplier ID is required",
            "Supplier Name is required",
        ] {
            assert!(errors.iter().any(|e| e == expected), "missing: {expected}");
        }
    }

    #[test]
    fn non_numeric_fields_name_the_field() {
        let mut form = filled_form();
        form.cost = "abc".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.contains(&"Cost must be a number".to_string()));

        let mut form = filled_form();
        form.price = "12,5".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.contains(&"Price must be a number".to_string()));
    }

    #[test]
    fn cost_above_price_always_fails() {
        let mut form = filled_form();
        form.cost = "10".to_string();
        form.price = "9.99".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors, vec!["Cost cannot be greater than price".to_string()]);

        // Still reported when other fields are broken too.
        form.supplier_name.clear();
        let errors = form.validate().unwrap_err();
        assert!(errors.contains(&"Cost cannot be greater than price".to_string()));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut form = filled_form();
        form.date = "01/03/2024".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.contains(&"Date must be a valid date (YYYY-MM-DD)".to_string()));
    }
}
