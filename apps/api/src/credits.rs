//! Credit ledger — the capability gate consulted before every paid AI
//! call. File-backed so balances survive restarts; check-and-decrement is
//! a single atomic operation under the ledger mutex.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Credits seeded into a ledger that has never been opened before.
pub const FREE_CREDITS: u32 = 3;

/// Credits one AI invocation costs.
const AI_CREDIT_COST: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LedgerFile {
    balance: u32,
    grants: Vec<GrantRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GrantRecord {
    amount: u32,
    granted_at: DateTime<Utc>,
}

pub struct CreditLedger {
    path: PathBuf,
    state: Mutex<LedgerFile>,
}

impl CreditLedger {
    /// Opens the ledger at `path`, seeding it with the free-credit grant
    /// on first use. A malformed ledger file is a configuration defect
    /// and fails startup rather than silently resetting balances.
    pub fn open(path: impl Into<PathBuf>, seed: u32) -> Result<Self> {
        let path = path.into();
        let state = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("malformed credit ledger at {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(seed, "seeding new credit ledger");
                let seeded = LedgerFile {
                    balance: seed,
                    grants: vec![GrantRecord {
                        amount: seed,
                        granted_at: Utc::now(),
                    }],
                };
                write_file(&path, &seeded)?;
                seeded
            }
            Err(e) => {
                return Err(e).context(format!("failed to read credit ledger at {}", path.display()))
            }
        };

        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    /// Check-and-decrement as one atomic operation. Returns false without
    /// touching the balance when no credits remain.
    pub fn try_consume(&self) -> Result<bool> {
        let mut state = self.state.lock().expect("credit ledger mutex poisoned");
        if state.balance < AI_CREDIT_COST {
            return Ok(false);
        }
        state.balance -= AI_CREDIT_COST;
        write_file(&self.path, &state)?;
        Ok(true)
    }

    pub fn balance(&self) -> u32 {
        self.state.lock().expect("credit ledger mutex poisoned").balance
    }

    /// Adds credits and returns the new balance.
    pub fn grant(&self, amount: u32) -> Result<u32> {
        let mut state = self.state.lock().expect("credit ledger mutex poisoned");
        state.balance += amount;
        state.grants.push(GrantRecord {
            amount,
            granted_at: Utc::now(),
        });
        write_file(&self.path, &state)?;
        Ok(state.balance)
    }
}

fn write_file(path: &Path, state: &LedgerFile) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    let raw = serde_json::to_string_pretty(state)?;
    std::fs::write(path, raw)
        .with_context(|| format!("failed to write credit ledger at {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("credits.json")
    }

    #[test]
    fn test_new_ledger_is_seeded_with_free_credits() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = CreditLedger::open(ledger_path(&dir), FREE_CREDITS).unwrap();
        assert_eq!(ledger.balance(), 3);
    }

    #[test]
    fn test_consume_decrements_until_denied() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = CreditLedger::open(ledger_path(&dir), 2).unwrap();

        assert!(ledger.try_consume().unwrap());
        assert!(ledger.try_consume().unwrap());
        assert!(!ledger.try_consume().unwrap());
        assert_eq!(ledger.balance(), 0);
    }

    #[test]
    fn test_denied_consume_does_not_touch_balance() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = CreditLedger::open(ledger_path(&dir), 0).unwrap();
        assert!(!ledger.try_consume().unwrap());
        assert_eq!(ledger.balance(), 0);
    }

    #[test]
    fn test_grant_increases_balance() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = CreditLedger::open(ledger_path(&dir), 1).unwrap();
        assert_eq!(ledger.grant(5).unwrap(), 6);
        assert_eq!(ledger.balance(), 6);
    }

    #[test]
    fn test_balance_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = ledger_path(&dir);

        {
            let ledger = CreditLedger::open(&path, 3).unwrap();
            assert!(ledger.try_consume().unwrap());
        }

        // A reopened ledger sees the decremented balance, not the seed.
        let reopened = CreditLedger::open(&path, 3).unwrap();
        assert_eq!(reopened.balance(), 2);
    }

    #[test]
    fn test_malformed_ledger_fails_instead_of_reseeding() {
        let dir = tempfile::tempdir().unwrap();
        let path = ledger_path(&dir);
        std::fs::write(&path, "not json").unwrap();
        assert!(CreditLedger::open(&path, 3).is_err());
    }
}
