use super::filters::SearchFilters;

type ChangeHook = Box<dyn Fn(&SearchQuery) + Send + Sync>;

/// Owns the current `{term, filters}` pair for one listing view. Setters
/// replace the whole filter object; every change bumps the generation and
/// fires the change hook so the view re-runs the materializer.
pub struct SearchQuery {
    term: String,
    filters: SearchFilters,
    generation: u64,
    on_change: Option<ChangeHook>,
}

impl SearchQuery {
    pub fn new() -> Self {
        SearchQuery {
            term: String::new(),
            filters: SearchFilters::default(),
            generation: 0,
            on_change: None,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn active_filters_count(&self) -> usize {
        self.filters.active_count()
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.notify();
    }

    pub fn set_filters(&mut self, filters: SearchFilters) {
        self.filters = filters;
        self.notify();
    }

    /// Resets the filters only; the search term deliberately survives a
    /// clear, matching the observed UI behavior.
    pub fn clear_filters(&mut self) {
        self.filters = SearchFilters::default();
        self.notify();
    }

    pub fn set_on_change(&mut self, hook: ChangeHook) {
        self.on_change = Some(hook);
    }

    fn notify(&mut self) {
        self.generation += 1;
        if let Some(hook) = &self.on_change {
            hook(self);
        }
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}
