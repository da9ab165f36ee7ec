use crate::app::core::App;
use crate::app::models::Tab;
use crate::constants::SPINNER_FRAMES;
use std::time::{SystemTime, UNIX_EPOCH};

impl App {
    pub fn select_tab(&mut self, tab: Tab) {
        self.selected_tab = tab;
    }

    pub fn toggle_tab(&mut self) {
        self.selected_tab = self.selected_tab.other();
    }

    fn current_len(&self) -> usize {
        match self.selected_tab {
            Tab::Tokens => self.snapshot.tokens.len(),
            Tab::Nfts => self.snapshot.nfts.len(),
        }
    }

    pub fn next_item(&mut self) {
        let items_len = self.current_len();
        if items_len == 0 {
            return;
        }

        let state = match self.selected_tab {
            Tab::Tokens => &mut self.tokens_state,
            Tab::Nfts => &mut self.nfts_state,
        };
        let i = match state.selected() {
            Some(i) if i >= items_len - 1 => items_len - 1,
            Some(i) => i + 1,
            None => 0,
        };
        state.select(Some(i));
    }

    pub fn previous_item(&mut self) {
        let items_len = self.current_len();
        if items_len == 0 {
            return;
        }

        let state = match self.selected_tab {
            Tab::Tokens => &mut self.tokens_state,
            Tab::Nfts => &mut self.nfts_state,
        };
        let i = match state.selected() {
            Some(i) => i.saturating_sub(1).min(items_len - 1),
            None => 0,
        };
        state.select(Some(i));
    }

    pub fn spinner_frame(&self) -> &'static str {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        SPINNER_FRAMES[(millis / 150) as usize % SPINNER_FRAMES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::WalletSnapshot;
    use crate::config::StalePolicy;
    use crate::wallet::{FungibleHolding, WalletClient, WalletHoldings};

    fn app_with_tokens(n: usize) -> App {
        let mut app = App::new(WalletClient::new("http://127.0.0.1:9"), StalePolicy::LastSettled);
        let tokens = (0..n)
            .map(|i| FungibleHolding {
                mint_address: format!("mint{}", i),
                raw_amount: i as u64,
                symbol: None,
                decimals: 0,
            })
            .collect();
        app.snapshot = WalletSnapshot::ready(WalletHoldings {
            tokens,
            nfts: Vec::new(),
        });
        app.reset_selection();
        app
    }

    #[test]
    fn cursor_is_clamped_to_list_bounds() {
        let mut app = app_with_tokens(2);
        app.previous_item();
        assert_eq!(app.tokens_state.selected(), Some(0));
        app.next_item();
        app.next_item();
        assert_eq!(app.tokens_state.selected(), Some(1));
    }

    #[test]
    fn empty_tab_ignores_navigation() {
        let mut app = app_with_tokens(2);
        app.select_tab(Tab::Nfts);
        app.next_item();
        assert_eq!(app.nfts_state.selected(), None);
        assert_eq!(app.tokens_state.selected(), Some(0));
    }
}
