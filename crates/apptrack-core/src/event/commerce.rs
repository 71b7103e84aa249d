#[derive(Debug, Clone, PartialEq)]
pub struct EcommerceItem {
    pub sku: String,
    pub price: f64,
    pub quantity: i64,
    pub name: Option<String>,
    pub category: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EcommerceTransaction {
    pub order_id: String,
    pub total_value: f64,
    pub items: Vec<EcommerceItem>,
    pub affiliation: Option<String>,
    pub tax_value: Option<f64>,
    pub shipping: Option<f64>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
}

impl EcommerceTransaction {
    pub fn new(order_id: impl Into<String>, total_value: f64, items: Vec<EcommerceItem>) -> Self {
        Self {
            order_id: order_id.into(),
            total_value,
            items,
            affiliation: None,
            tax_value: None,
            shipping: None,
            city: None,
            state: None,
            country: None,
            currency: None,
        }
    }
}
