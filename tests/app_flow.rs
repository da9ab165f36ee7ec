mod common;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;
use tokio::sync::{Mutex, Notify};
use wallet_viewer::app::{App, AppAction, Phase, Tab};
use wallet_viewer::chain::{ChainReader, KeyedAccount, Pubkey};
use wallet_viewer::config::StalePolicy;
use wallet_viewer::error::{FetchError, MetadataFetchError, RpcError};
use wallet_viewer::wallet::{AssetIndex, DigitalAsset, MetadataFetcher, WalletClient};

const WALLET_A: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";
const WALLET_B: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";

/// Each owner holds one token whose mint is derived from the owner key.
/// Requests for gated owners block until released.
#[derive(Default)]
struct GatedChain {
    gates: HashMap<Pubkey, Arc<Notify>>,
}

impl GatedChain {
    fn gate(&mut self, owner: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.insert(owner.parse().unwrap(), Arc::clone(&gate));
        gate
    }
}

fn mint_for(owner: &Pubkey) -> Pubkey {
    let mut bytes = owner.to_bytes();
    bytes.reverse();
    Pubkey::new_from_array(bytes)
}

#[async_trait]
impl ChainReader for GatedChain {
    async fn token_accounts_by_owner(
        &self,
        owner: &Pubkey,
        _program_id: &Pubkey,
    ) -> Result<Vec<KeyedAccount>, RpcError> {
        if let Some(gate) = self.gates.get(owner) {
            gate.notified().await;
        }
        Ok(vec![KeyedAccount {
            pubkey: pubkey(1),
            data: token_account(&mint_for(owner), 2, 1234),
        }])
    }

    async fn multiple_accounts(&self, keys: &[Pubkey]) -> Result<Vec<Option<Vec<u8>>>, RpcError> {
        Ok(vec![None; keys.len()])
    }
}

struct NoAssets;

#[async_trait]
impl AssetIndex for NoAssets {
    async fn digital_assets_by_owner(
        &self,
        _owner: &Pubkey,
    ) -> Result<Vec<DigitalAsset>, FetchError> {
        Ok(Vec::new())
    }
}

struct NoDocuments;

#[async_trait]
impl MetadataFetcher for NoDocuments {
    async fn fetch_metadata(&self, _uri: &str) -> Result<Value, MetadataFetchError> {
        Err(MetadataFetchError::Status(404))
    }
}

fn shared_app(chain: GatedChain, policy: StalePolicy) -> Arc<Mutex<App>> {
    let client =
        WalletClient::from_parts(Arc::new(chain), Arc::new(NoAssets), Arc::new(NoDocuments));
    Arc::new(Mutex::new(App::new(client, policy)))
}

fn shown_mint(app: &App) -> String {
    app.snapshot.tokens[0].mint_address.clone()
}

fn expected_mint(owner: &str) -> String {
    mint_for(&owner.parse().unwrap()).to_string()
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[tokio::test]
async fn later_settling_search_wins_under_last_settled() {
    let mut chain = GatedChain::default();
    let gate_a = chain.gate(WALLET_A);
    let app = shared_app(chain, StalePolicy::LastSettled);

    let search_a = App::fetch_wallet_data(Arc::clone(&app), WALLET_A.to_string()).await;
    let search_b = App::fetch_wallet_data(Arc::clone(&app), WALLET_B.to_string()).await;

    search_b.await.unwrap();
    assert_eq!(shown_mint(&*app.lock().await), expected_mint(WALLET_B));

    gate_a.notify_one();
    search_a.await.unwrap();

    let app = app.lock().await;
    assert_eq!(app.snapshot.phase, Phase::Ready);
    assert_eq!(shown_mint(&app), expected_mint(WALLET_A));
}

#[tokio::test]
async fn superseded_search_is_dropped_under_latest_request() {
    let mut chain = GatedChain::default();
    let gate_a = chain.gate(WALLET_A);
    let app = shared_app(chain, StalePolicy::LatestRequest);

    let search_a = App::fetch_wallet_data(Arc::clone(&app), WALLET_A.to_string()).await;
    let search_b = App::fetch_wallet_data(Arc::clone(&app), WALLET_B.to_string()).await;

    search_b.await.unwrap();
    gate_a.notify_one();
    search_a.await.unwrap();

    let app = app.lock().await;
    assert_eq!(shown_mint(&app), expected_mint(WALLET_B));
}

#[tokio::test]
async fn typed_address_is_submitted_with_enter() {
    let app = shared_app(GatedChain::default(), StalePolicy::LastSettled);

    let action = {
        let mut guard = app.lock().await;
        for c in format!("  {}  ", WALLET_B).chars() {
            guard.handle_key(press(KeyCode::Char(c)));
        }
        guard.handle_key(press(KeyCode::Enter))
    };
    assert_eq!(action, AppAction::Submit);

    let search = App::submit_form(Arc::clone(&app)).await.unwrap();
    search.await.unwrap();

    let app = app.lock().await;
    assert_eq!(app.last_address.as_deref(), Some(WALLET_B));
    assert_eq!(app.snapshot.tokens[0].display_amount(), "12.34");
    assert_eq!(app.snapshot.phase, Phase::Ready);
}

#[tokio::test]
async fn enter_is_ignored_while_a_search_is_loading() {
    let mut chain = GatedChain::default();
    let gate = chain.gate(WALLET_A);
    let app = shared_app(chain, StalePolicy::LastSettled);

    app.lock().await.paste(WALLET_A);
    let search = App::submit_form(Arc::clone(&app)).await.unwrap();

    {
        let mut guard = app.lock().await;
        assert!(guard.snapshot.is_loading());
        assert_eq!(guard.handle_key(press(KeyCode::Enter)), AppAction::None);
    }
    assert!(App::submit_form(Arc::clone(&app)).await.is_none());

    gate.notify_one();
    search.await.unwrap();
    assert!(!app.lock().await.snapshot.is_loading());
}

#[tokio::test]
async fn failed_search_shows_error_and_tab_switch_keeps_data() {
    let app = shared_app(GatedChain::default(), StalePolicy::LastSettled);

    App::fetch_wallet_data(Arc::clone(&app), WALLET_A.to_string())
        .await
        .await
        .unwrap();
    App::fetch_wallet_data(Arc::clone(&app), "0OIl".to_string())
        .await
        .await
        .unwrap();

    let mut app = app.lock().await;
    let before = app.snapshot.clone();
    assert!(before.error().unwrap().starts_with("Invalid public key input"));
    assert_eq!(before.tokens.len(), 1);

    app.handle_key(press(KeyCode::Tab));
    assert_eq!(app.selected_tab, Tab::Nfts);
    assert_eq!(app.snapshot, before);
}
