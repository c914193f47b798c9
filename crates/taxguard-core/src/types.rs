//! Domain types for the detection form and login screen

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Model Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Classifier the prediction service should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    LogisticRegression,
    RandomForest,
    DecisionTree,
    Svm,
}

impl ModelType {
    /// All models in selector order
    pub const ALL: [ModelType; 4] = [
        ModelType::LogisticRegression,
        ModelType::RandomForest,
        ModelType::DecisionTree,
        ModelType::Svm,
    ];

    /// Wire identifier sent as `modelType`
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::LogisticRegression => "logistic_regression",
            ModelType::RandomForest => "random_forest",
            ModelType::DecisionTree => "decision_tree",
            ModelType::Svm => "svm",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModelType::LogisticRegression => "Logistic Regression",
            ModelType::RandomForest => "Random Forest",
            ModelType::DecisionTree => "Decision Tree",
            ModelType::Svm => "Support Vector Machine",
        }
    }

    /// One-line description shown next to the model name
    pub fn description(&self) -> &'static str {
        match self {
            ModelType::LogisticRegression => "Linear decision boundary over scaled features",
            ModelType::RandomForest => "Ensemble of decision trees with majority voting",
            ModelType::DecisionTree => "Single tree of threshold splits on the features",
            ModelType::Svm => "Maximum-margin classifier with a kernel boundary",
        }
    }

    /// Next model in selector order, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::index_of(self);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous model in selector order, wrapping around
    pub fn prev(self) -> Self {
        let idx = Self::index_of(self);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index_of(model: Self) -> usize {
        Self::ALL.iter().position(|m| *m == model).unwrap_or(0)
    }
}

impl std::fmt::Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown model type: {s}"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Form Fields
// ─────────────────────────────────────────────────────────────────────────────

/// The nine financial inputs of the detection form, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    IncomeDeclared,
    BusinessRevenue,
    Expenses,
    LivingCost,
    LuxurySpending,
    OnlineSpending,
    PropertyTax,
    CarMaintenance,
    EmployeeSalary,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::IncomeDeclared,
        FormField::BusinessRevenue,
        FormField::Expenses,
        FormField::LivingCost,
        FormField::LuxurySpending,
        FormField::OnlineSpending,
        FormField::PropertyTax,
        FormField::CarMaintenance,
        FormField::EmployeeSalary,
    ];

    /// JSON key used in the request body
    pub fn key(&self) -> &'static str {
        match self {
            FormField::IncomeDeclared => "incomeDeclared",
            FormField::BusinessRevenue => "businessRevenue",
            FormField::Expenses => "expenses",
            FormField::LivingCost => "livingCost",
            FormField::LuxurySpending => "luxurySpending",
            FormField::OnlineSpending => "onlineSpending",
            FormField::PropertyTax => "propertyTax",
            FormField::CarMaintenance => "carMaintenance",
            FormField::EmployeeSalary => "employeeSalary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::IncomeDeclared => "Income Declared",
            FormField::BusinessRevenue => "Business Revenue",
            FormField::Expenses => "Expenses",
            FormField::LivingCost => "Living Cost",
            FormField::LuxurySpending => "Luxury Spending",
            FormField::OnlineSpending => "Online Spending",
            FormField::PropertyTax => "Property Tax",
            FormField::CarMaintenance => "Car Maintenance",
            FormField::EmployeeSalary => "Employee Salary",
        }
    }
}

/// Label used when the model selector is the missing entry
pub const MODEL_LABEL: &str = "Model";

/// In-progress detection form contents.
///
/// Values are kept exactly as typed; the service does the numeric parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub income_declared: String,
    pub business_revenue: String,
    pub expenses: String,
    pub living_cost: String,
    pub luxury_spending: String,
    pub online_spending: String,
    pub property_tax: String,
    pub car_maintenance: String,
    pub employee_salary: String,
    pub model_type: Option<ModelType>,
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::IncomeDeclared => &self.income_declared,
            FormField::BusinessRevenue => &self.business_revenue,
            FormField::Expenses => &self.expenses,
            FormField::LivingCost => &self.living_cost,
            FormField::LuxurySpending => &self.luxury_spending,
            FormField::OnlineSpending => &self.online_spending,
            FormField::PropertyTax => &self.property_tax,
            FormField::CarMaintenance => &self.car_maintenance,
            FormField::EmployeeSalary => &self.employee_salary,
        }
    }

    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::IncomeDeclared => &mut self.income_declared,
            FormField::BusinessRevenue => &mut self.business_revenue,
            FormField::Expenses => &mut self.expenses,
            FormField::LivingCost => &mut self.living_cost,
            FormField::LuxurySpending => &mut self.luxury_spending,
            FormField::OnlineSpending => &mut self.online_spending,
            FormField::PropertyTax => &mut self.property_tax,
            FormField::CarMaintenance => &mut self.car_maintenance,
            FormField::EmployeeSalary => &mut self.employee_salary,
        }
    }

    /// Replace the value of one field. No validation.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    pub fn select_model(&mut self, model: ModelType) {
        self.model_type = Some(model);
    }

    /// Label of the first empty entry, in presentation order
    pub fn first_missing(&self) -> Option<&'static str> {
        FormField::ALL
            .iter()
            .find(|f| self.get(**f).trim().is_empty())
            .map(|f| f.label())
            .or_else(|| self.model_type.is_none().then_some(MODEL_LABEL))
    }

    /// True when all nine fields and the model are filled in
    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Credentials
// ─────────────────────────────────────────────────────────────────────────────

/// Username/password pair typed into the login screen
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Password never reaches logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_record() -> FormRecord {
        let mut record = FormRecord::new();
        for (i, field) in FormField::ALL.iter().enumerate() {
            record.update_field(*field, format!("{}", (i + 1) * 1000));
        }
        record.select_model(ModelType::RandomForest);
        record
    }

    #[test]
    fn test_model_wire_identifiers() {
        let ids: Vec<&str> = ModelType::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(
            ids,
            vec!["logistic_regression", "random_forest", "decision_tree", "svm"]
        );
    }

    #[test]
    fn test_model_serde_matches_as_str() {
        for model in ModelType::ALL {
            let json = serde_json::to_string(&model).unwrap();
            assert_eq!(json, format!("\"{}\"", model.as_str()));
        }
    }

    #[test]
    fn test_model_cycling_wraps() {
        assert_eq!(ModelType::Svm.next(), ModelType::LogisticRegression);
        assert_eq!(ModelType::LogisticRegression.prev(), ModelType::Svm);
        assert_eq!(ModelType::RandomForest.next(), ModelType::DecisionTree);
    }

    #[test]
    fn test_model_from_str() {
        assert_eq!("svm".parse::<ModelType>(), Ok(ModelType::Svm));
        assert!("neural_net".parse::<ModelType>().is_err());
    }

    #[test]
    fn test_empty_record_reports_first_field_missing() {
        let record = FormRecord::new();
        assert_eq!(record.first_missing(), Some("Income Declared"));
        assert!(!record.is_complete());
    }

    #[test]
    fn test_each_missing_field_blocks_completion() {
        for field in FormField::ALL {
            let mut record = filled_record();
            record.update_field(field, "");
            assert_eq!(record.first_missing(), Some(field.label()));
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut record = filled_record();
        record.update_field(FormField::PropertyTax, "   ");
        assert_eq!(record.first_missing(), Some("Property Tax"));
    }

    #[test]
    fn test_missing_model_blocks_completion() {
        let mut record = filled_record();
        record.model_type = None;
        assert_eq!(record.first_missing(), Some(MODEL_LABEL));
    }

    #[test]
    fn test_complete_record() {
        assert!(filled_record().is_complete());
    }

    #[test]
    fn test_record_serializes_wire_keys_as_strings() {
        let record = filled_record();
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 10);
        for field in FormField::ALL {
            assert_eq!(obj[field.key()].as_str(), Some(record.get(field)));
        }
        assert_eq!(obj["modelType"], "random_forest");
    }

    #[test]
    fn test_record_round_trip_preserves_text() {
        let mut record = filled_record();
        record.update_field(FormField::LivingCost, "0012.50");
        record.update_field(FormField::OnlineSpending, "1e3");

        let json = serde_json::to_string(&record).unwrap();
        let back: FormRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(back, record);
        assert_eq!(back.living_cost, "0012.50");
        assert_eq!(back.online_spending, "1e3");
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("admin", "admin123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("admin123"));
    }
}
