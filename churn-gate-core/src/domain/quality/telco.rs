// churn-gate-core/src/domain/quality/telco.rs
//
// The fixed checklist for the Telco customer churn dataset.

pub const CUSTOMER_ID: &str = "customerID";
pub const GENDER: &str = "gender";
pub const PARTNER: &str = "Partner";
pub const DEPENDENTS: &str = "Dependents";
pub const PHONE_SERVICE: &str = "PhoneService";
pub const INTERNET_SERVICE: &str = "InternetService";
pub const CONTRACT: &str = "Contract";
pub const TENURE: &str = "tenure";
pub const MONTHLY_CHARGES: &str = "MonthlyCharges";
pub const TOTAL_CHARGES: &str = "TotalCharges";

pub const REQUIRED_COLUMNS: [&str; 10] = [
    CUSTOMER_ID,
    GENDER,
    PARTNER,
    DEPENDENTS,
    PHONE_SERVICE,
    INTERNET_SERVICE,
    CONTRACT,
    TENURE,
    MONTHLY_CHARGES,
    TOTAL_CHARGES,
];

pub const GENDER_VALUES: &[&str] = &["Male", "Female"];
pub const YES_NO_VALUES: &[&str] = &["Yes", "No"];
pub const CONTRACT_VALUES: &[&str] = &["Month-to-month", "One year", "Two year"];
pub const INTERNET_VALUES: &[&str] = &["DSL", "Fiber optic", "No"];

pub const YES_NO_COLUMNS: [&str; 3] = [PARTNER, DEPENDENTS, PHONE_SERVICE];

/// Categorical columns with their allowed values, in checking order.
pub const CATEGORICAL_DOMAINS: [(&str, &[&str]); 6] = [
    (GENDER, GENDER_VALUES),
    (PARTNER, YES_NO_VALUES),
    (DEPENDENTS, YES_NO_VALUES),
    (PHONE_SERVICE, YES_NO_VALUES),
    (CONTRACT, CONTRACT_VALUES),
    (INTERNET_SERVICE, INTERNET_VALUES),
];

/// Inclusive numeric bounds; `None` leaves that side open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericBound {
    pub column: &'static str,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericBound {
    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

pub const TENURE_BOUNDS: NumericBound = NumericBound {
    column: TENURE,
    min: Some(0.0),
    max: Some(120.0),
};

pub const MONTHLY_CHARGES_BOUNDS: NumericBound = NumericBound {
    column: MONTHLY_CHARGES,
    min: Some(0.0),
    max: Some(200.0),
};

pub const TOTAL_CHARGES_BOUNDS: NumericBound = NumericBound {
    column: TOTAL_CHARGES,
    min: Some(0.0),
    max: None,
};

pub const NUMERIC_BOUNDS: [NumericBound; 3] =
    [TENURE_BOUNDS, MONTHLY_CHARGES_BOUNDS, TOTAL_CHARGES_BOUNDS];

/// Share of rows that must satisfy `TotalCharges >= MonthlyCharges`.
pub const CONSISTENCY_MOSTLY: f64 = 0.95;
