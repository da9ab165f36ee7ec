use crate::wallet::{FungibleHolding, NonFungibleHolding, WalletHoldings};

/// Where the current request lifecycle stands. Loading and failure are
/// variants of one value, so they can never both hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// The result set shown on screen. Replaced as a whole on every transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletSnapshot {
    pub tokens: Vec<FungibleHolding>,
    pub nfts: Vec<NonFungibleHolding>,
    pub phase: Phase,
}

impl WalletSnapshot {
    pub fn ready(holdings: WalletHoldings) -> Self {
        WalletSnapshot {
            tokens: holdings.tokens,
            nfts: holdings.nfts,
            phase: Phase::Ready,
        }
    }

    /// Keeps the previous lists around; they are not drawn while loading.
    pub fn into_loading(self) -> Self {
        WalletSnapshot {
            phase: Phase::Loading,
            ..self
        }
    }

    /// Keeps the previous lists; nothing from the failed attempt is stored.
    pub fn into_failed(self, message: String) -> Self {
        WalletSnapshot {
            phase: Phase::Failed(message),
            ..self
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Tokens,
    Nfts,
}

impl Tab {
    pub fn index(self) -> usize {
        match self {
            Tab::Tokens => 0,
            Tab::Nfts => 1,
        }
    }

    pub fn other(self) -> Tab {
        match self {
            Tab::Tokens => Tab::Nfts,
            Tab::Nfts => Tab::Tokens,
        }
    }

    pub fn title(self, snapshot: &WalletSnapshot) -> String {
        match self {
            Tab::Tokens => format!("Tokens ({})", snapshot.tokens.len()),
            Tab::Nfts => format!("NFTs ({})", snapshot.nfts.len()),
        }
    }
}

/// One submitted search, tagged with its issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub id: u64,
    pub address: String,
}
