//! The async screening service.

use crate::{
    config::ScreenConfig,
    history::{CompanyEpsHistory, CompanyFinancialHistory},
    matcher::{EpsMatcher, GrowthMatcher},
    query::{EpsQuery, GrowthQuery},
    screen::{ScreenOutcome, screen_eps, screen_financials},
};
use std::{collections::HashMap, future::Future, sync::Arc};
use tendenza_traits::{
    AnnualStatement, Company, PageRequest, PaginatedResult, Result, StatementLoader, TendenzaError,
};
use tracing::{debug, info};

/// Screening service over a [`StatementLoader`].
///
/// Each request loads the full statement snapshot, screens it, then asks the
/// loader for the identities of the companies on the requested page only.
/// The loader calls are the only suspension points.
#[derive(Clone)]
pub struct ScreeningEngine {
    loader: Arc<dyn StatementLoader>,
    config: ScreenConfig,
}

impl ScreeningEngine {
    /// Create an engine over `loader`.
    #[must_use]
    pub fn new(loader: Arc<dyn StatementLoader>, config: ScreenConfig) -> Self {
        Self { loader, config }
    }

    /// Get the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &ScreenConfig {
        &self.config
    }

    /// Companies whose reported EPS rose in each of the most recent `years`
    /// reported years, with their EPS over those years.
    ///
    /// # Errors
    ///
    /// Returns [`TendenzaError::InvalidQuery`] if `years` is zero, or any
    /// error of the loader.
    pub async fn screen_growing_eps(
        &self,
        years: usize,
        page_number: usize,
        page_size: usize,
    ) -> Result<PaginatedResult<CompanyEpsHistory>> {
        let query = EpsQuery::new(years, page_number, self.config.clamp_page_size(page_size));
        query.validate()?;
        info!(
            loader = self.loader.name(),
            years,
            page = query.page_number,
            "screening for growing EPS"
        );

        let statements = self.load_statements().await?;
        let outcome = screen_eps(&statements, &query)?;
        let matcher = EpsMatcher::new(query.years);

        self.assemble(&outcome, query.page(), |company, history| {
            let window = matcher.window(history).unwrap_or_default();
            CompanyEpsHistory::new(company, &window)
        })
        .await
    }

    /// Companies meeting every criterion of `query`, with their figures over
    /// the shared window.
    ///
    /// # Errors
    ///
    /// Returns [`TendenzaError::InvalidQuery`] for a malformed query, or any
    /// error of the loader.
    pub async fn screen_growing_financials(
        &self,
        query: &GrowthQuery,
    ) -> Result<PaginatedResult<CompanyFinancialHistory>> {
        query.validate()?;
        let page = PageRequest::new(query.page_number, self.config.clamp_page_size(query.page_size));
        info!(
            loader = self.loader.name(),
            metrics = query.requested_metrics().len(),
            floor = ?query.min_operating_margin,
            page = page.page_number(),
            "screening for growing financials"
        );

        let statements = self.load_statements().await?;
        let outcome = screen_financials(&statements, query)?;
        let matcher = GrowthMatcher::from_query(query);

        self.assemble(&outcome, page, |company, history| {
            CompanyFinancialHistory::new(
                company,
                matcher.shared_window(history),
                query.min_operating_margin,
            )
        })
        .await
    }

    async fn load_statements(&self) -> Result<Vec<AnnualStatement>> {
        let statements = self
            .with_timeout("annual statements", self.loader.fetch_all_annual_statements())
            .await?;
        debug!(statements = statements.len(), "loaded annual statements");
        Ok(statements)
    }

    /// Slice the page, fetch its identities and build one item per company
    /// found, in page order.
    async fn assemble<T>(
        &self,
        outcome: &ScreenOutcome,
        page: PageRequest,
        build: impl Fn(&Company, &[AnnualStatement]) -> T,
    ) -> Result<PaginatedResult<T>> {
        let codes = outcome.page_codes(&page);
        if codes.is_empty() {
            return Ok(PaginatedResult::new(Vec::new(), outcome.total(), page));
        }

        let companies: HashMap<_, _> = self
            .with_timeout("company records", self.loader.fetch_companies_by_codes(codes))
            .await?
            .into_iter()
            .map(|company| (company.code.clone(), company))
            .collect();

        let items: Vec<T> = codes
            .iter()
            .filter_map(|code| {
                let Some(company) = companies.get(code) else {
                    debug!(company = %code, "no company record, omitting from page");
                    return None;
                };
                let history = outcome.history(code).unwrap_or_default();
                Some(build(company, history))
            })
            .collect();

        Ok(PaginatedResult::new(items, outcome.total(), page))
    }

    async fn with_timeout<T>(
        &self,
        what: &str,
        call: impl Future<Output = Result<T>> + Send,
    ) -> Result<T> {
        match self.config.loader_timeout() {
            Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
                TendenzaError::Timeout(
                    u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
                    what.to_string(),
                )
            })?,
            None => call.await,
        }
    }
}

impl std::fmt::Debug for ScreeningEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreeningEngine")
            .field("loader", &self.loader.name())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryLoader;
    use approx::assert_relative_eq;
    use async_trait::async_trait;
    use std::time::Duration;
    use tendenza_traits::CompanyCode;

    fn eps_series(code: &str, values: &[f64]) -> Vec<AnnualStatement> {
        values
            .iter()
            .zip(2020..)
            .map(|(&eps, year)| AnnualStatement::new(code, year).with_eps(eps))
            .collect()
    }

    // Revenue of 100 makes each margin equal to its numerator.
    fn financial(code: &str, year: i32, eps: f64, op_margin: f64, gross_margin: f64) -> AnnualStatement {
        AnnualStatement::new(code, year)
            .with_eps(eps)
            .with_revenue(100.0)
            .with_operating_costs(100.0 - gross_margin)
            .with_operating_expenses(gross_margin - op_margin)
            .with_net_income(op_margin / 2.0)
    }

    fn engine(statements: Vec<AnnualStatement>, companies: Vec<Company>) -> ScreeningEngine {
        ScreeningEngine::new(
            Arc::new(MemoryLoader::new(statements, companies)),
            ScreenConfig::default(),
        )
    }

    fn companies(codes: &[&str]) -> Vec<Company> {
        codes
            .iter()
            .map(|code| Company::new(*code, format!("{code} Corp")))
            .collect()
    }

    #[tokio::test]
    async fn test_growing_eps_scenario() {
        let engine = engine(eps_series("A", &[1.0, 1.5, 1.2, 2.0, 2.5]), companies(&["A"]));

        let result = engine.screen_growing_eps(3, 1, 10).await.unwrap();
        assert_eq!(result.total_count, 1);
        let years: Vec<i32> = result.items[0].yearly_eps.iter().map(|y| y.year).collect();
        assert_eq!(years, vec![2022, 2023, 2024]);
        assert_eq!(result.items[0].company_name, "A Corp");

        let result = engine.screen_growing_eps(5, 1, 10).await.unwrap();
        assert_eq!(result.total_count, 0);
        assert!(result.items.is_empty());
    }

    #[tokio::test]
    async fn test_growing_eps_rejects_zero_years() {
        let engine = engine(Vec::new(), Vec::new());
        let result = engine.screen_growing_eps(0, 1, 10).await;
        assert!(matches!(result, Err(TendenzaError::InvalidQuery(_))));
    }

    #[tokio::test]
    async fn test_floor_scenario() {
        let statements = vec![
            financial("B", 2022, 1.0, 8.0, 40.0),
            financial("B", 2023, 2.0, 12.0, 41.0),
            financial("B", 2024, 3.0, 15.0, 42.0),
        ];
        let engine = engine(statements, companies(&["B"]));

        let query = GrowthQuery {
            eps_years: Some(3),
            operating_margin_years: Some(2),
            min_operating_margin: Some(10.0),
            ..GrowthQuery::default()
        };
        let result = engine.screen_growing_financials(&query).await.unwrap();
        assert_eq!(result.total_count, 0);

        let without_floor = GrowthQuery {
            min_operating_margin: None,
            ..query
        };
        let result = engine.screen_growing_financials(&without_floor).await.unwrap();
        assert_eq!(result.total_count, 1);

        let rows = &result.items[0].yearly_financials;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].year, 2024);
        assert_relative_eq!(rows[0].operating_margin.unwrap(), 15.0);
        assert_relative_eq!(rows[2].gross_margin.unwrap(), 40.0);
    }

    #[tokio::test]
    async fn test_floor_years_without_floor_keep_history_window() {
        let engine = engine(
            eps_series("A", &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
            companies(&["A"]),
        );

        let query = GrowthQuery {
            eps_years: Some(2),
            min_operating_margin_years: Some(5),
            ..GrowthQuery::default()
        };
        let result = engine.screen_growing_financials(&query).await.unwrap();
        assert_eq!(result.total_count, 1);
        assert_eq!(result.items[0].yearly_financials.len(), 2);
    }

    #[tokio::test]
    async fn test_combined_criteria_scenario() {
        let statements = vec![
            // Both EPS and gross margin rise.
            financial("A", 2022, 1.0, 10.0, 40.0),
            financial("A", 2023, 2.0, 10.0, 41.0),
            financial("A", 2024, 3.0, 10.0, 42.0),
            // EPS rises, gross margin falls in the last year.
            financial("B", 2022, 1.0, 10.0, 40.0),
            financial("B", 2023, 2.0, 10.0, 42.0),
            financial("B", 2024, 3.0, 10.0, 41.0),
            // Gross margin rises, EPS flat.
            financial("C", 2022, 1.0, 10.0, 40.0),
            financial("C", 2023, 1.0, 10.0, 41.0),
            financial("C", 2024, 1.0, 10.0, 42.0),
        ];
        let engine = engine(statements, companies(&["A", "B", "C"]));

        let query = GrowthQuery {
            eps_years: Some(3),
            gross_margin_years: Some(2),
            ..GrowthQuery::default()
        };
        let result = engine.screen_growing_financials(&query).await.unwrap();
        let codes: Vec<&str> = result.items.iter().map(|i| i.company_code.as_str()).collect();
        assert_eq!(codes, vec!["A"]);
        assert_eq!(result.items[0].yearly_financials.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_query_qualifies_nothing() {
        let engine = engine(eps_series("A", &[1.0, 2.0, 3.0]), companies(&["A"]));
        let result = engine
            .screen_growing_financials(&GrowthQuery::default())
            .await
            .unwrap();
        assert_eq!(result.total_count, 0);
        assert_eq!(result.total_pages, 0);
        assert!(result.items.is_empty());
    }

    #[tokio::test]
    async fn test_pagination_law() {
        let codes = ["E", "A", "D", "B", "G", "C", "F"];
        let statements: Vec<AnnualStatement> = codes
            .iter()
            .flat_map(|code| eps_series(code, &[1.0, 2.0, 3.0]))
            .collect();
        let engine = engine(statements, companies(&codes));

        let first = engine.screen_growing_eps(3, 1, 3).await.unwrap();
        assert_eq!(first.total_count, 7);
        assert_eq!(first.total_pages, 3);

        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            let result = engine.screen_growing_eps(3, page, 3).await.unwrap();
            assert_eq!(result.total_count, 7);
            seen.extend(result.items.into_iter().map(|i| i.company_code));
        }
        assert_eq!(seen, vec!["A", "B", "C", "D", "E", "F", "G"]);

        let beyond = engine.screen_growing_eps(3, 4, 3).await.unwrap();
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total_count, 7);
        assert_eq!(beyond.page_number, 4);
    }

    #[tokio::test]
    async fn test_idempotent() {
        let engine = engine(
            [eps_series("A", &[1.0, 2.0]), eps_series("B", &[2.0, 3.0])].concat(),
            companies(&["A", "B"]),
        );
        let query = GrowthQuery {
            eps_years: Some(2),
            ..GrowthQuery::default()
        };
        let first = engine.screen_growing_financials(&query).await.unwrap();
        let second = engine.screen_growing_financials(&query).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_missing_company_record_still_counted() {
        let engine = engine(
            [eps_series("A", &[1.0, 2.0]), eps_series("B", &[1.0, 2.0])].concat(),
            companies(&["B"]),
        );
        let result = engine.screen_growing_eps(2, 1, 10).await.unwrap();
        assert_eq!(result.total_count, 2);
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].company_code, "B");
    }

    #[tokio::test]
    async fn test_page_size_is_clamped() {
        let engine = engine(eps_series("A", &[1.0, 2.0]), companies(&["A"]));
        let result = engine.screen_growing_eps(2, 0, 1000).await.unwrap();
        assert_eq!(result.page_number, 1);
        assert_eq!(result.page_size, 100);
    }

    struct SlowLoader;

    #[async_trait]
    impl StatementLoader for SlowLoader {
        async fn fetch_all_annual_statements(&self) -> Result<Vec<AnnualStatement>> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(Vec::new())
        }

        async fn fetch_companies_by_codes(&self, _codes: &[CompanyCode]) -> Result<Vec<Company>> {
            Ok(Vec::new())
        }

        fn name(&self) -> &str {
            "slow"
        }
    }

    #[tokio::test]
    async fn test_loader_timeout() {
        let config = ScreenConfig::default().with_loader_timeout(Duration::from_millis(20));
        let engine = ScreeningEngine::new(Arc::new(SlowLoader), config);

        let result = engine.screen_growing_eps(3, 1, 10).await;
        assert!(matches!(result, Err(TendenzaError::Timeout(20, _))));
    }
}
