//! Test helpers: mock implementations and factory methods.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use passport_chain::{ChainError, ChainResult, TransactionRequest, TxHash, TxReceipt, WalletBridge};
use passport_riot::{Rank, RankLookup, Region, ResolvedAccount, RiotApi, RiotError};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::LinkedAccountRepository;
use crate::types::LinkedAccount;

// ===== MockRiotApi =====

pub struct MockRiotApi {
    resolve_result: RwLock<Result<ResolvedAccount, RiotError>>,
    icon_result: RwLock<Result<i64, RiotError>>,
    icon_calls: AtomicUsize,
}

/// The default resolve result used by most tests.
pub fn faker_resolved() -> ResolvedAccount {
    ResolvedAccount {
        game_name: "Faker".to_string(),
        tag_line: "KR1".to_string(),
        puuid: "PUUID-FAKER".to_string(),
        summoner_id: "SUMMONER-FAKER".to_string(),
        rank: RankLookup::Ranked(Rank {
            tier: "CHALLENGER".to_string(),
            division: "I".to_string(),
        }),
    }
}

impl MockRiotApi {
    pub fn new() -> Self {
        Self {
            resolve_result: RwLock::new(Ok(faker_resolved())),
            icon_result: RwLock::new(Ok(0)),
            icon_calls: AtomicUsize::new(0),
        }
    }

    pub async fn set_resolve(&self, result: Result<ResolvedAccount, RiotError>) {
        *self.resolve_result.write().await = result;
    }

    pub async fn set_icon(&self, result: Result<i64, RiotError>) {
        *self.icon_result.write().await = result;
    }

    /// Number of `current_profile_icon` calls observed.
    pub fn icon_calls(&self) -> usize {
        self.icon_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RiotApi for MockRiotApi {
    async fn resolve_account(
        &self,
        _game_name: &str,
        _tag_line: &str,
        _region: Region,
    ) -> Result<ResolvedAccount, RiotError> {
        self.resolve_result.read().await.clone()
    }

    async fn current_profile_icon(
        &self,
        _summoner_id: &str,
        _region: Region,
    ) -> Result<i64, RiotError> {
        self.icon_calls.fetch_add(1, Ordering::SeqCst);
        self.icon_result.read().await.clone()
    }
}

// ===== MockLinkedAccountRepository =====

pub struct MockLinkedAccountRepository {
    accounts: RwLock<HashMap<String, LinkedAccount>>,
    /// If Some, `save` returns this error (for testing failure paths).
    save_error: RwLock<Option<String>>,
}

impl MockLinkedAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            save_error: RwLock::new(None),
        }
    }

    pub async fn set_save_error(&self, err: Option<String>) {
        *self.save_error.write().await = err;
    }
}

#[async_trait]
impl LinkedAccountRepository for MockLinkedAccountRepository {
    async fn find_by_id(&self, id: &str, user_id: &str) -> CoreResult<Option<LinkedAccount>> {
        Ok(self
            .accounts
            .read()
            .await
            .get(id)
            .filter(|account| account.user_id == user_id)
            .cloned())
    }

    async fn find_by_puuid(&self, puuid: &str) -> CoreResult<Option<LinkedAccount>> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|account| account.puuid == puuid)
            .cloned())
    }

    async fn find_by_user(&self, user_id: &str) -> CoreResult<Vec<LinkedAccount>> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .filter(|account| account.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_verified_by_user(&self, user_id: &str) -> CoreResult<Vec<LinkedAccount>> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .filter(|account| account.user_id == user_id && account.verified)
            .cloned()
            .collect())
    }

    async fn save(&self, account: &LinkedAccount) -> CoreResult<()> {
        if let Some(ref msg) = *self.save_error.read().await {
            return Err(CoreError::Storage(msg.clone()));
        }
        self.accounts
            .write()
            .await
            .insert(account.id.clone(), account.clone());
        Ok(())
    }

    async fn delete(&self, id: &str, user_id: &str) -> CoreResult<()> {
        let mut accounts = self.accounts.write().await;
        match accounts.get(id) {
            Some(account) if account.user_id == user_id => {
                accounts.remove(id);
                Ok(())
            }
            _ => Err(CoreError::NotFound(format!("linked account {id}"))),
        }
    }
}

// ===== MockWallet =====

pub struct MockWallet {
    address: RwLock<Option<String>>,
    chain_id: RwLock<u64>,
    switch_error: RwLock<Option<ChainError>>,
    send_error: RwLock<Option<ChainError>>,
    sent: RwLock<Vec<TransactionRequest>>,
}

impl MockWallet {
    /// Connected on Monad testnet by default.
    pub fn new() -> Self {
        Self {
            address: RwLock::new(Some("0x0000000000000000000000000000000000001337".to_string())),
            chain_id: RwLock::new(passport_chain::MONAD_TESTNET.chain_id),
            switch_error: RwLock::new(None),
            send_error: RwLock::new(None),
            sent: RwLock::new(Vec::new()),
        }
    }

    pub async fn disconnect(&self) {
        *self.address.write().await = None;
    }

    pub async fn set_chain(&self, chain_id: u64) {
        *self.chain_id.write().await = chain_id;
    }

    pub async fn set_switch_error(&self, err: Option<ChainError>) {
        *self.switch_error.write().await = err;
    }

    pub async fn set_send_error(&self, err: Option<ChainError>) {
        *self.send_error.write().await = err;
    }

    /// Transactions submitted so far.
    pub async fn sent(&self) -> Vec<TransactionRequest> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl WalletBridge for MockWallet {
    async fn address(&self) -> Option<String> {
        self.address.read().await.clone()
    }

    async fn chain_id(&self) -> ChainResult<u64> {
        Ok(*self.chain_id.read().await)
    }

    async fn request_chain_switch(&self, chain_id: u64) -> ChainResult<()> {
        if let Some(err) = self.switch_error.read().await.clone() {
            return Err(err);
        }
        *self.chain_id.write().await = chain_id;
        Ok(())
    }

    async fn send_transaction(&self, request: &TransactionRequest) -> ChainResult<TxHash> {
        if let Some(err) = self.send_error.read().await.clone() {
            return Err(err);
        }
        let mut sent = self.sent.write().await;
        sent.push(request.clone());
        Ok(TxHash(format!("0xtx{:04}", sent.len())))
    }

    async fn transaction_receipt(&self, tx_hash: &TxHash) -> ChainResult<Option<TxReceipt>> {
        // Confirm on the first poll.
        Ok(Some(TxReceipt {
            tx_hash: tx_hash.clone(),
            block_number: 42,
            success: true,
        }))
    }
}

// ===== Factory methods =====

/// Create a test `ServiceContext` plus handles to every mock.
pub fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockRiotApi>,
    Arc<MockLinkedAccountRepository>,
    Arc<MockWallet>,
) {
    let riot = Arc::new(MockRiotApi::new());
    let accounts = Arc::new(MockLinkedAccountRepository::new());
    let wallet = Arc::new(MockWallet::new());

    let ctx = Arc::new(ServiceContext::new(
        riot.clone(),
        accounts.clone(),
        wallet.clone(),
    ));

    (ctx, riot, accounts, wallet)
}

/// A verified row for `user_id`, unique per `game_name`.
pub fn verified_account(user_id: &str, game_name: &str) -> LinkedAccount {
    let now = Utc::now();
    LinkedAccount {
        id: format!("acct-{game_name}"),
        user_id: user_id.to_string(),
        game_name: game_name.to_string(),
        tag_line: "KR1".to_string(),
        puuid: format!("PUUID-{game_name}"),
        summoner_id: format!("SUMMONER-{game_name}"),
        region: Region::Kr,
        rank_tier: Some("CHALLENGER".to_string()),
        rank_division: Some("I".to_string()),
        verification_code: None,
        verified: true,
        created_at: now,
        updated_at: now,
    }
}
