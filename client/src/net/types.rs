//! Wire DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Optional fields default
//! so partial payloads still decode; consumers decide how to render gaps.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The client's belief about who is logged in.
///
/// When `authenticated` is false every other field is meaningless; read the
/// identity through [`Session::email`] and friends, which enforce that.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub subscription_code: Option<String>,
}

impl Session {
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|_| self.authenticated)
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user_id.filter(|_| self.authenticated)
    }

    pub fn subscription_code(&self) -> Option<&str> {
        self.subscription_code.as_deref().filter(|_| self.authenticated)
    }
}

/// Login/registration form payload. Never stored beyond the form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Portfolios the backend can build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PortfolioVariant {
    Master,
    Usa,
    Me,
}

impl PortfolioVariant {
    /// Parse a route segment. Unknown segments yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "master" => Some(Self::Master),
            "usa" => Some(Self::Usa),
            "me" => Some(Self::Me),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::Usa => "usa",
            Self::Me => "me",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Master => "Master Portfolio",
            Self::Usa => "USA Portfolio",
            Self::Me => "My Portfolio",
        }
    }
}

/// Aggregate numbers across all holdings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    #[serde(default)]
    pub total_invested: f64,
    #[serde(default)]
    pub total_return: f64,
    #[serde(default)]
    pub total_current_value: f64,
    #[serde(default)]
    pub percentage_up: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockHistoryPoint {
    pub date: String,
    pub close: f64,
}

/// One ticker position plus its price history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockHolding {
    pub ticker: String,
    #[serde(default)]
    pub long_name: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub earliest_buy_date: Option<String>,
    #[serde(default)]
    pub weighted_avg_price: Option<f64>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub total_quantity: Option<f64>,
    #[serde(default)]
    pub performance: Option<String>,
    #[serde(default)]
    pub percentage_change: Option<f64>,
    #[serde(default)]
    pub invested: Option<f64>,
    #[serde(default)]
    pub current_value: Option<f64>,
    #[serde(default)]
    pub history: Vec<StockHistoryPoint>,
}

/// `GET /portfolio/{variant}` response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub summary: PortfolioSummary,
    #[serde(default)]
    pub holdings: Vec<StockHolding>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockRecommendation {
    pub name: String,
    pub price: f64,
    pub recommendation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date_posted: Option<String>,
}

/// `POST /contact` payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// `GET /stock-search` response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockQuote {
    pub symbol: String,
    pub name: Option<String>,
    pub current_price: Option<f64>,
    pub previous_close: Option<f64>,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
    pub volume: Option<f64>,
    pub market_cap: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub dividend_yield: Option<f64>,
    #[serde(rename = "high52Week")]
    pub high_52_week: Option<f64>,
    #[serde(rename = "low52Week")]
    pub low_52_week: Option<f64>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub employees: Option<f64>,
    pub founded: Option<String>,
    pub headquarters: Option<String>,
}
