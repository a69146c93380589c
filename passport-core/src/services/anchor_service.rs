//! Credential anchoring: digest the verified linked-account set and record
//! it as calldata in a zero-value self-transaction on the target chain.

use std::sync::Arc;

use chrono::Utc;

use passport_chain::{ChainProfile, TransactionRequest, TransactionWatcher, MONAD_TESTNET};

use crate::crypto::{credential_digest, digest_hex};
use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{AnchorOutcome, AnchorPayload, AnchorRecord, AnchoredAccount};

/// Credential anchoring service.
pub struct AnchorService {
    ctx: Arc<ServiceContext>,
    chain: ChainProfile,
    watcher: TransactionWatcher,
}

impl AnchorService {
    /// Anchoring against Monad testnet with default confirmation polling.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self::with_chain(ctx, MONAD_TESTNET, TransactionWatcher::default())
    }

    #[must_use]
    pub fn with_chain(
        ctx: Arc<ServiceContext>,
        chain: ChainProfile,
        watcher: TransactionWatcher,
    ) -> Self {
        Self {
            ctx,
            chain,
            watcher,
        }
    }

    /// Anchor the caller's verified accounts.
    ///
    /// Both wizard gates are re-checked here rather than trusted from the
    /// dashboard state: wallet connected, and at least one verified row.
    /// A successful chain switch returns [`AnchorOutcome::NetworkSwitched`]
    /// without submitting anything; the caller must re-invoke.
    pub async fn anchor(&self, user_id: &str) -> CoreResult<AnchorOutcome> {
        if user_id.is_empty() {
            return Err(CoreError::Validation("userId is required".to_string()));
        }

        let Some(address) = self.ctx.wallet.address().await else {
            return Err(CoreError::Precondition("no wallet connected".to_string()));
        };

        let connected_chain = self.ctx.wallet.chain_id().await?;
        if connected_chain != self.chain.chain_id {
            return match self.ctx.wallet.request_chain_switch(self.chain.chain_id).await {
                Ok(()) => Ok(AnchorOutcome::NetworkSwitched {
                    chain_id: self.chain.chain_id,
                }),
                Err(e) => Err(CoreError::NetworkMismatch {
                    expected: self.chain.chain_id,
                    actual: connected_chain,
                    remediation: format!(
                        "Switch your wallet to {} and retry. ({e})",
                        self.chain.name
                    ),
                }),
            };
        }

        let mut verified = self.ctx.accounts.find_verified_by_user(user_id).await?;
        if verified.is_empty() {
            return Err(CoreError::Precondition(
                "no verified accounts to anchor".to_string(),
            ));
        }
        // Canonical account order for the digest.
        verified.sort_by(|a, b| {
            (&a.game_name, &a.tag_line).cmp(&(&b.game_name, &b.tag_line))
        });

        let payload = AnchorPayload {
            accounts: verified.iter().map(AnchoredAccount::from).collect(),
            timestamp: Utc::now().timestamp(),
            wallet_address: address.clone(),
        };
        let digest = credential_digest(&payload)?;

        let request = TransactionRequest::self_transfer(address, digest.to_vec());
        let tx_hash = self.ctx.wallet.send_transaction(&request).await?;
        log::info!(
            "anchoring digest {} for {} account(s) in tx {tx_hash}",
            digest_hex(&digest),
            payload.accounts.len()
        );

        let receipt = self
            .watcher
            .wait_for_confirmation(self.ctx.wallet.as_ref(), &tx_hash)
            .await?;

        Ok(AnchorOutcome::Anchored(AnchorRecord {
            explorer_url: self.chain.explorer_tx_url(&receipt.tx_hash),
            tx_hash: receipt.tx_hash,
            block_number: receipt.block_number,
            digest: digest_hex(&digest),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_context, verified_account};
    use passport_chain::ChainError;

    #[tokio::test]
    async fn no_wallet_is_precondition_error() {
        let (ctx, _, accounts, wallet) = create_test_context();
        accounts.save(&verified_account("user-a", "Faker")).await.unwrap();
        wallet.disconnect().await;

        let svc = AnchorService::new(ctx);
        let result = svc.anchor("user-a").await;
        assert!(matches!(result, Err(CoreError::Precondition(_))));
        assert!(wallet.sent().await.is_empty());
    }

    #[tokio::test]
    async fn empty_verified_set_rejected_before_any_transaction() {
        let (ctx, _, accounts, wallet) = create_test_context();
        // a pending (unverified) row must not count
        let mut pending = verified_account("user-a", "Faker");
        pending.verified = false;
        pending.verification_code = Some("7".to_string());
        accounts.save(&pending).await.unwrap();

        let svc = AnchorService::new(ctx);
        let result = svc.anchor("user-a").await;
        assert!(matches!(result, Err(CoreError::Precondition(_))));
        assert!(wallet.sent().await.is_empty(), "no transaction may be built");
    }

    #[tokio::test]
    async fn wrong_chain_with_successful_switch_requires_reinvoke() {
        let (ctx, _, accounts, wallet) = create_test_context();
        accounts.save(&verified_account("user-a", "Faker")).await.unwrap();
        wallet.set_chain(1).await;

        let svc = AnchorService::new(ctx);
        let outcome = svc.anchor("user-a").await.unwrap();
        assert!(matches!(
            outcome,
            AnchorOutcome::NetworkSwitched { chain_id: 10143 }
        ));
        assert!(wallet.sent().await.is_empty(), "switch must not auto-continue");

        // wallet is now on the right chain; the re-invoke proceeds
        let outcome = svc.anchor("user-a").await.unwrap();
        assert!(matches!(outcome, AnchorOutcome::Anchored(_)));
    }

    #[tokio::test]
    async fn wrong_chain_with_failed_switch_is_network_mismatch() {
        let (ctx, _, accounts, wallet) = create_test_context();
        accounts.save(&verified_account("user-a", "Faker")).await.unwrap();
        wallet.set_chain(1).await;
        wallet
            .set_switch_error(Some(ChainError::SwitchFailed("user declined".to_string())))
            .await;

        let svc = AnchorService::new(ctx);
        let result = svc.anchor("user-a").await;
        match result {
            Err(CoreError::NetworkMismatch {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 10143);
                assert_eq!(actual, 1);
            }
            other => panic!("expected NetworkMismatch, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn anchors_digest_in_self_transfer() {
        let (ctx, _, accounts, wallet) = create_test_context();
        accounts.save(&verified_account("user-a", "Faker")).await.unwrap();
        accounts.save(&verified_account("user-a", "Chovy")).await.unwrap();

        let svc = AnchorService::new(ctx);
        let outcome = svc.anchor("user-a").await.unwrap();

        let AnchorOutcome::Anchored(record) = outcome else {
            panic!("expected Anchored outcome");
        };
        assert_eq!(record.digest.len(), 64);
        assert!(record.explorer_url.contains("testnet.monadexplorer.com/tx/"));

        let sent = wallet.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, sent[0].to, "self-directed");
        assert_eq!(sent[0].value, 0, "zero-value");
        assert_eq!(hex::encode(&sent[0].data), record.digest);
    }

    #[tokio::test]
    async fn other_users_accounts_are_excluded() {
        let (ctx, _, accounts, wallet) = create_test_context();
        accounts.save(&verified_account("user-b", "Faker")).await.unwrap();

        let svc = AnchorService::new(ctx);
        let result = svc.anchor("user-a").await;
        assert!(matches!(result, Err(CoreError::Precondition(_))));
        assert!(wallet.sent().await.is_empty());
    }

    #[tokio::test]
    async fn wallet_rejection_surfaces_as_transaction_error() {
        let (ctx, _, accounts, wallet) = create_test_context();
        accounts.save(&verified_account("user-a", "Faker")).await.unwrap();
        wallet
            .set_send_error(Some(ChainError::Rejected("user denied".to_string())))
            .await;

        let svc = AnchorService::new(ctx);
        let result = svc.anchor("user-a").await;
        assert!(matches!(
            result,
            Err(CoreError::Transaction(ChainError::Rejected(_)))
        ));
    }
}
