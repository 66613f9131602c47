//! Screening queries.

use serde::{Deserialize, Serialize};
use tendenza_criteria::Metric;
use tendenza_traits::{PageRequest, Result, TendenzaError};

const fn default_page_number() -> usize {
    1
}

const fn default_page_size() -> usize {
    10
}

/// EPS-only screen: `years` consecutive years of rising reported EPS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpsQuery {
    /// Number of most recent reported years that must increase.
    pub years: usize,
    /// The 1-based page number.
    #[serde(default = "default_page_number")]
    pub page_number: usize,
    /// Items per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl EpsQuery {
    /// Create an EPS query.
    #[must_use]
    pub const fn new(years: usize, page_number: usize, page_size: usize) -> Self {
        Self {
            years,
            page_number,
            page_size,
        }
    }

    /// The requested page, clamped to valid values.
    #[must_use]
    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.page_number, self.page_size)
    }

    /// Reject queries that cannot be evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`TendenzaError::InvalidQuery`] if `years` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.years == 0 {
            return Err(TendenzaError::InvalidQuery(
                "years must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Multi-metric growth screen.
///
/// Each `*_years` field is an independent lookback; `None` or zero means the
/// metric is not screened. The minimum operating margin applies to every
/// year of the shared window, whose length is the largest lookback (or
/// `min_operating_margin_years`, if larger and a floor is given).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthQuery {
    /// Years of rising EPS.
    #[serde(default)]
    pub eps_years: Option<usize>,
    /// Years of rising operating margin.
    #[serde(default)]
    pub operating_margin_years: Option<usize>,
    /// Years of rising gross margin.
    #[serde(default)]
    pub gross_margin_years: Option<usize>,
    /// Years of rising net profit margin.
    #[serde(default)]
    pub net_profit_margin_years: Option<usize>,
    /// Minimum operating margin in percent, held across the shared window.
    #[serde(default)]
    pub min_operating_margin: Option<f64>,
    /// Years the operating margin floor must hold for.
    #[serde(default)]
    pub min_operating_margin_years: Option<usize>,
    /// The 1-based page number.
    #[serde(default = "default_page_number")]
    pub page_number: usize,
    /// Items per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for GrowthQuery {
    fn default() -> Self {
        Self {
            eps_years: None,
            operating_margin_years: None,
            gross_margin_years: None,
            net_profit_margin_years: None,
            min_operating_margin: None,
            min_operating_margin_years: None,
            page_number: default_page_number(),
            page_size: default_page_size(),
        }
    }
}

impl GrowthQuery {
    /// The lookback requested for `metric`, if any.
    #[must_use]
    pub fn lookback(&self, metric: Metric) -> Option<usize> {
        let years = match metric {
            Metric::Eps => self.eps_years,
            Metric::OperatingMargin => self.operating_margin_years,
            Metric::GrossMargin => self.gross_margin_years,
            Metric::NetProfitMargin => self.net_profit_margin_years,
        };
        years.filter(|&y| y > 0)
    }

    /// Requested metrics with their lookbacks, in a fixed order.
    #[must_use]
    pub fn requested_metrics(&self) -> Vec<(Metric, usize)> {
        Metric::ALL
            .into_iter()
            .filter_map(|metric| self.lookback(metric).map(|years| (metric, years)))
            .collect()
    }

    /// Years the margin floor must hold for, if a floor is given.
    #[must_use]
    pub fn floor_years(&self) -> Option<usize> {
        self.min_operating_margin?;
        self.min_operating_margin_years.filter(|&y| y > 0)
    }

    /// Whether the query requests nothing and so matches nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min_operating_margin.is_none() && self.requested_metrics().is_empty()
    }

    /// Length of the shared evaluation window.
    ///
    /// A floor with nothing else to size the window applies to the most
    /// recent year.
    #[must_use]
    pub fn window_len(&self) -> usize {
        let longest = self
            .requested_metrics()
            .into_iter()
            .map(|(_, years)| years)
            .chain(self.floor_years())
            .max()
            .unwrap_or(0);

        if longest == 0 && self.min_operating_margin.is_some() {
            1
        } else {
            longest
        }
    }

    /// The requested page, clamped to valid values.
    #[must_use]
    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.page_number, self.page_size)
    }

    /// Reject queries that cannot be evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`TendenzaError::InvalidQuery`] if the margin floor is not a
    /// finite number.
    pub fn validate(&self) -> Result<()> {
        if let Some(floor) = self.min_operating_margin.filter(|f| !f.is_finite()) {
            return Err(TendenzaError::InvalidQuery(format!(
                "minimum operating margin must be finite, got {floor}"
            )));
        }
        Ok(())
    }
}
