use ratatui::widgets::ListState;

use crate::app::models::{Tab, WalletSnapshot};
use crate::config::StalePolicy;
use crate::wallet::WalletClient;

pub struct App {
    pub client: WalletClient,
    pub stale_policy: StalePolicy,
    pub address_input: String,
    pub snapshot: WalletSnapshot,
    pub selected_tab: Tab,
    pub tokens_state: ListState,
    pub nfts_state: ListState,
    pub last_address: Option<String>,
    pub(crate) latest_request: u64,
}

impl App {
    pub fn new(client: WalletClient, stale_policy: StalePolicy) -> App {
        App {
            client,
            stale_policy,
            address_input: String::new(),
            snapshot: WalletSnapshot::default(),
            selected_tab: Tab::default(),
            tokens_state: ListState::default(),
            nfts_state: ListState::default(),
            last_address: None,
            latest_request: 0,
        }
    }

    /// Id of the most recently issued search, 0 before the first one.
    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    // point both cursors at the first entry of the fresh lists
    pub(crate) fn reset_selection(&mut self) {
        self.tokens_state
            .select((!self.snapshot.tokens.is_empty()).then_some(0));
        self.nfts_state
            .select((!self.snapshot.nfts.is_empty()).then_some(0));
    }
}
