//! Rate Application Services
//!
//! Orchestrates startup and conversions through the port traits.
//! Contains NO infrastructure logic - files and HTTP live behind the ports.

use rates_types::{
    ApiConfig, ConfigError, ConfigStore, Conversion, ConversionError, ConversionRequest,
    CurrencyCode, ExchangeRateTable, RateSource, RateStore, StartupError,
};

/// Startup service: config, snapshot and remote fetch.
///
/// Generic over the three ports so tests can inject in-memory fakes and the
/// binary can inject the JSON file stores and the HTTP client.
pub struct RateService<C: ConfigStore, S: RateStore, F: RateSource> {
    config_store: C,
    store: S,
    source: F,
}

impl<C: ConfigStore, S: RateStore, F: RateSource> RateService<C, S, F> {
    pub fn new(config_store: C, store: S, source: F) -> Self {
        Self {
            config_store,
            store,
            source,
        }
    }

    /// Returns a reference to the config store.
    pub fn config_store(&self) -> &C {
        &self.config_store
    }

    /// Returns a reference to the snapshot store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a reference to the rate source.
    pub fn source(&self) -> &F {
        &self.source
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Config
    // ─────────────────────────────────────────────────────────────────────────────

    /// Loads and validates the API config, then writes it back unchanged.
    ///
    /// A failed write-back is logged and ignored.
    pub fn load_config(&self) -> Result<ApiConfig, ConfigError> {
        let config = self.config_store.load()?;
        if let Err(e) = self.config_store.save(&config) {
            tracing::warn!(error = %e, "Could not re-save API config");
        }
        Ok(config)
    }

    /// Validates and writes a fresh API config.
    pub fn init_config(&self, api_url: &str, api_id: &str) -> Result<ApiConfig, ConfigError> {
        let config = ApiConfig::new(api_url, api_id)?;
        self.config_store.save(&config)?;
        tracing::info!(api_url = %config.api_url(), "Wrote API config");
        Ok(config)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Rates
    // ─────────────────────────────────────────────────────────────────────────────

    /// Produces the rate table for this run.
    ///
    /// An existing snapshot always wins and no request is made. Otherwise
    /// exactly one request is made and its result persisted before
    /// returning.
    pub async fn startup(&self) -> Result<ExchangeRateTable, StartupError> {
        let config = self.load_config()?;

        if self.store.exists() {
            tracing::info!("Loading exchange rates from snapshot");
            return Ok(self.store.load()?);
        }

        tracing::info!("Fetching exchange rates from API");
        let table = self.fetch(&config).await?;
        if let Err(e) = self.store.save(&table) {
            tracing::warn!(error = %e, "Could not save rate snapshot");
        }
        Ok(table)
    }

    /// Fetches a fresh table and overwrites the snapshot.
    ///
    /// Nothing is written when the fetch fails. Unlike `startup`, a failed
    /// write is returned to the caller.
    pub async fn refresh(&self, config: &ApiConfig) -> Result<ExchangeRateTable, StartupError> {
        let table = self.fetch(config).await?;
        self.store.save(&table)?;
        Ok(table)
    }

    async fn fetch(&self, config: &ApiConfig) -> Result<ExchangeRateTable, StartupError> {
        let table = self.source.fetch(config).await?;
        tracing::info!(currencies = table.len(), "Fetched exchange rates");
        Ok(table)
    }
}

/// Per-request conversion service over the table loaded at startup.
#[derive(Debug, Clone)]
pub struct ConversionService {
    table: ExchangeRateTable,
}

impl ConversionService {
    pub fn new(table: ExchangeRateTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ExchangeRateTable {
        &self.table
    }

    /// Initial selector values: `USD` and `EUR` when listed, otherwise the
    /// first codes in table order. The two differ whenever the table has
    /// more than one entry.
    pub fn default_pair(&self) -> (Option<CurrencyCode>, Option<CurrencyCode>) {
        let preferred = |code: &str| {
            CurrencyCode::parse(code)
                .ok()
                .filter(|c| self.table.contains(c))
        };

        let from = preferred("USD").or_else(|| self.table.codes().next().cloned());
        let to = preferred("EUR")
            .filter(|c| Some(c) != from.as_ref())
            .or_else(|| {
                self.table
                    .codes()
                    .find(|c| Some(*c) != from.as_ref())
                    .cloned()
            });
        (from, to)
    }

    /// Validates a selector pair before an amount is asked for.
    pub fn select_pair(
        &self,
        from: &str,
        to: &str,
    ) -> Result<(CurrencyCode, CurrencyCode), ConversionError> {
        let from = exchange_rates::lookup(&self.table, from)?;
        let to = exchange_rates::lookup(&self.table, to)?;
        exchange_rates::rate(&self.table, &from, &to)?;
        Ok((from, to))
    }

    /// Runs one conversion.
    pub fn convert(&self, req: ConversionRequest) -> Result<Conversion, ConversionError> {
        let result = exchange_rates::convert(&self.table, &req.from, &req.to, req.amount)?;
        tracing::debug!(from = %req.from, to = %req.to, amount = req.amount, result, "Converted");
        Ok(Conversion {
            from: req.from,
            to: req.to,
            amount: req.amount,
            result,
        })
    }

    /// Runs one conversion from raw user text.
    ///
    /// Currencies are checked first; the amount is only parsed once the
    /// pair is known to be convertible.
    pub fn convert_input(
        &self,
        from: &str,
        to: &str,
        amount: &str,
    ) -> Result<Conversion, ConversionError> {
        let (from, to) = self.select_pair(from, to)?;
        let amount = parse_amount(amount)?;
        self.convert(ConversionRequest { from, to, amount })
    }
}

/// Parses free-text amount input. Any finite number is accepted.
pub fn parse_amount(text: &str) -> Result<f64, ConversionError> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| ConversionError::AmountParse(trimmed.to_string()))
}
