pub mod input;
pub mod render;

/// Presentation-only state that the core does not need to know about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub endpoint: String,
    /// First visible row of the results list.
    pub results_offset: usize,
}

impl UiState {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            results_offset: 0,
        }
    }

    pub fn scroll(&mut self, delta: isize, row_count: usize) {
        let max = row_count.saturating_sub(1);
        self.results_offset = self.results_offset.saturating_add_signed(delta).min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_is_clamped_to_rows() {
        let mut ui = UiState::new("http://localhost:8008/LIVE");
        ui.scroll(-3, 10);
        assert_eq!(ui.results_offset, 0);
        ui.scroll(4, 10);
        assert_eq!(ui.results_offset, 4);
        ui.scroll(100, 10);
        assert_eq!(ui.results_offset, 9);
        ui.scroll(1, 0);
        assert_eq!(ui.results_offset, 0);
    }
}
