//! Engine configuration management.

use serde::Deserialize;

use crate::types::AccountCode;

/// Engine configuration.
///
/// Every field has a default, so the engine runs with zero external
/// configuration. Deployments override the chart when their account plan
/// differs from the stock codes.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EngineConfig {
    /// Account codes used when building vouchers.
    #[serde(default)]
    pub chart: ChartConfig,
    /// Posting behavior.
    #[serde(default)]
    pub posting: PostingConfig,
}

/// Account codes for each posting role.
///
/// Defaults match the source system's chart: 501 purchases, 135 input-VAT
/// receivable, 252 payables, 132 receivables, 401 revenue, 255 output-VAT
/// payable, 101 cash.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    /// Inventory/expense account debited on purchase (상품매입).
    #[serde(default = "default_purchases")]
    pub purchases: AccountCode,
    /// Input-VAT receivable account (부가세대급금).
    #[serde(default = "default_input_vat")]
    pub input_vat: AccountCode,
    /// Payable account credited on purchase (미지급금).
    #[serde(default = "default_payable")]
    pub payable: AccountCode,
    /// Receivable account debited on sale (미수금).
    #[serde(default = "default_receivable")]
    pub receivable: AccountCode,
    /// Revenue account credited on sale (상품매출).
    #[serde(default = "default_revenue")]
    pub revenue: AccountCode,
    /// Output-VAT payable account (부가세예수금).
    #[serde(default = "default_output_vat")]
    pub output_vat: AccountCode,
    /// Cash account used by settlements (현금).
    #[serde(default = "default_cash")]
    pub cash: AccountCode,
}

fn default_purchases() -> AccountCode {
    AccountCode::new("501")
}

fn default_input_vat() -> AccountCode {
    AccountCode::new("135")
}

fn default_payable() -> AccountCode {
    AccountCode::new("252")
}

fn default_receivable() -> AccountCode {
    AccountCode::new("132")
}

fn default_revenue() -> AccountCode {
    AccountCode::new("401")
}

fn default_output_vat() -> AccountCode {
    AccountCode::new("255")
}

fn default_cash() -> AccountCode {
    AccountCode::new("101")
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            purchases: default_purchases(),
            input_vat: default_input_vat(),
            payable: default_payable(),
            receivable: default_receivable(),
            revenue: default_revenue(),
            output_vat: default_output_vat(),
            cash: default_cash(),
        }
    }
}

/// Posting behavior configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PostingConfig {
    /// Attempts to acquire a contended counterparty scope lock before
    /// surfacing a transient failure.
    #[serde(default = "default_lock_retry_attempts")]
    pub lock_retry_attempts: u32,
    /// Delay between lock attempts, in milliseconds.
    #[serde(default = "default_lock_retry_delay_ms")]
    pub lock_retry_delay_ms: u64,
}

fn default_lock_retry_attempts() -> u32 {
    5
}

fn default_lock_retry_delay_ms() -> u64 {
    20
}

impl Default for PostingConfig {
    fn default() -> Self {
        Self {
            lock_retry_attempts: default_lock_retry_attempts(),
            lock_retry_delay_ms: default_lock_retry_delay_ms(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("JANGBU").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
