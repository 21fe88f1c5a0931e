//! Dashboard view state.
//!
//! [`ViewState`] owns everything the dashboard displays: the address being
//! typed, the in-flight flag, the last error, the last lookup result, and the
//! pair filter with the totals it selects. Renderers only read it.

use hyperliquid::{apply_filter, PairTotals, WalletAddress};

use crate::lookup::{validate_address, LookupData, LookupError};

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Address text as typed.
    pub address_input: String,
    loading: bool,
    error: Option<String>,
    data: Option<LookupData>,
    pair_filter: Option<String>,
    displayed: PairTotals,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(address: &str) -> Self {
        Self {
            address_input: address.to_string(),
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> Option<&LookupData> {
        self.data.as_ref()
    }

    pub fn pair_filter(&self) -> Option<&str> {
        self.pair_filter.as_deref()
    }

    /// Volume and trades for the current filter.
    pub fn displayed(&self) -> PairTotals {
        self.displayed
    }

    /// Start a lookup for the typed address.
    ///
    /// Returns `None` while another lookup is in flight, or when the address
    /// is invalid (the validation message becomes the current error). On
    /// success the previous result and filter are cleared and the view is
    /// marked as loading until [`finish_lookup`](Self::finish_lookup).
    pub fn begin_lookup(&mut self) -> Option<WalletAddress> {
        if self.loading {
            return None;
        }
        let address = match validate_address(&self.address_input) {
            Ok(a) => a,
            Err(e) => {
                self.error = Some(e.to_string());
                return None;
            }
        };
        self.loading = true;
        self.error = None;
        self.data = None;
        self.pair_filter = None;
        self.displayed = PairTotals::default();
        Some(address)
    }

    /// Record the outcome of the lookup started by `begin_lookup`.
    pub fn finish_lookup(&mut self, result: Result<LookupData, LookupError>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.displayed = apply_filter(&data.report, None);
                self.data = Some(data);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Select a pair (`None` or empty for all pairs) and recompute totals.
    pub fn select_pair(&mut self, pair: Option<&str>) {
        self.pair_filter = pair.filter(|p| !p.is_empty()).map(str::to_string);
        if let Some(data) = &self.data {
            self.displayed = apply_filter(&data.report, self.pair_filter.as_deref());
        }
    }

    pub fn clear_filter(&mut self) {
        self.select_pair(None);
    }

    /// Pairs present in the current report, alphabetically.
    pub fn available_pairs(&self) -> Vec<String> {
        self.data
            .as_ref()
            .map(|d| d.report.pairs().into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Step the filter through "all pairs" followed by each pair in order,
    /// wrapping at either end.
    pub fn cycle_pair(&mut self, forward: bool) {
        let pairs = self.available_pairs();
        if pairs.is_empty() {
            return;
        }
        // Slot 0 is "all pairs".
        let slots = pairs.len() + 1;
        let current = self
            .pair_filter
            .as_deref()
            .and_then(|p| pairs.iter().position(|x| x == p))
            .map_or(0, |i| i + 1);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        match next {
            0 => self.select_pair(None),
            i => self.select_pair(Some(&pairs[i - 1])),
        }
    }
}
