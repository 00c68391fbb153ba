//! Roles, entitlements, and the authorization context.
//!
//! The authorization model is deliberately small: a closed set of roles, a
//! pure entitlement function of the connected identity, and a persisted
//! "active role" selection. The one invariant everything else relies on is
//! enforced in [`AuthContext::effective_role`]: the active role is always a
//! member of the identity's entitlement set, or it is forced back to
//! [`Role::Public`] — in the store, not just in the returned value.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{SdkError, StorageError};
use crate::events::{EventBus, EventKind};
use crate::shared::AddressStr;
use crate::storage::{KvStore, KEY_ROLE};

/// The single identity entitled to every role. A demo stand-in for a
/// registry-backed policy; swap [`entitlements_for`] to replace it.
pub const DEMO_SUPER_WALLET: &str =
    "OE44RO4QS3A7HCLMJZZDV5TJ3T5Z6LOZSY3XYNDN3ZV7FC4GEZFJLOI45Y";

/// The closed role enumeration. Exactly one role is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Public,
    Admin,
    Merchant,
    Beneficiary,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Public => "public",
            Role::Admin => "admin",
            Role::Merchant => "merchant",
            Role::Beneficiary => "beneficiary",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Role::Public),
            "admin" => Ok(Role::Admin),
            "merchant" => Ok(Role::Merchant),
            "beneficiary" => Ok(Role::Beneficiary),
            _ => Err(()),
        }
    }
}

const ALL_ROLES: &[Role] = &[Role::Public, Role::Admin, Role::Merchant, Role::Beneficiary];
const PUBLIC_ONLY: &[Role] = &[Role::Public];

/// Is this the distinguished demo super wallet? Case-insensitive, trimmed.
pub fn is_demo_super_wallet(addr: Option<&str>) -> bool {
    match addr {
        Some(a) => a.trim().eq_ignore_ascii_case(DEMO_SUPER_WALLET),
        None => false,
    }
}

/// The set of roles `identity` is entitled to select.
///
/// Pure and deterministic: no identity (or any identity other than the demo
/// super wallet) gets `{public}`; the demo super wallet gets every role.
/// Downstream code depends only on this function's contract, not on the
/// hard-coded single-tenant policy behind it.
pub fn entitlements_for(identity: Option<&str>) -> &'static [Role] {
    if is_demo_super_wallet(identity) {
        ALL_ROLES
    } else {
        PUBLIC_ONLY
    }
}

// ─── RoleStore ───────────────────────────────────────────────────────────────

/// The persisted active-role selection.
///
/// `set` is fire-and-forget: it writes unconditionally (a second identical
/// set still writes and still emits `role-changed`) and notifies the bus.
/// Readers treat the store as eventually consistent — concurrent writers
/// are last-write-wins.
pub struct RoleStore {
    store: Arc<dyn KvStore>,
    bus: Arc<EventBus>,
}

impl RoleStore {
    pub fn new(store: Arc<dyn KvStore>, bus: Arc<EventBus>) -> Self {
        Self { store, bus }
    }

    /// The currently persisted role. Absent or unrecognized values read as
    /// [`Role::Public`].
    pub fn get(&self) -> Result<Role, StorageError> {
        Ok(self
            .store
            .get(KEY_ROLE)?
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default())
    }

    /// Persist `role` and emit `role-changed`. Unconditional on purpose.
    pub fn set(&self, role: Role) -> Result<(), StorageError> {
        self.store.set(KEY_ROLE, role.as_str())?;
        self.bus.emit(EventKind::RoleChanged);
        Ok(())
    }
}

// ─── AuthContext ─────────────────────────────────────────────────────────────

/// Authorization context for one operation: the connected identity plus the
/// role store it validates against.
///
/// Built per call by the client rather than read from ambient globals, so
/// every privileged operation names the identity it was checked against.
pub struct AuthContext {
    identity: Option<AddressStr>,
    roles: RoleStore,
}

impl AuthContext {
    pub fn new(identity: Option<AddressStr>, roles: RoleStore) -> Self {
        Self { identity, roles }
    }

    /// The connected identity, if any.
    pub fn identity(&self) -> Option<&AddressStr> {
        self.identity.as_ref()
    }

    /// Roles this identity may select.
    pub fn entitlements(&self) -> &'static [Role] {
        entitlements_for(self.identity.as_ref().map(|a| a.as_str()))
    }

    /// The role all authorization checks see.
    ///
    /// Self-healing: if the stored active role is outside the entitlement
    /// set, the store is corrected to `public` (emitting `role-changed`)
    /// and `public` is returned.
    pub fn effective_role(&self) -> Result<Role, StorageError> {
        let active = self.roles.get()?;
        if self.entitlements().contains(&active) {
            return Ok(active);
        }
        tracing::warn!(
            active = active.as_str(),
            "active role outside entitlement set; resetting to public"
        );
        self.roles.set(Role::Public)?;
        Ok(Role::Public)
    }

    /// Gate an action on `required`. Fails with [`SdkError::Unauthorized`]
    /// carrying both the required and the effective role.
    pub fn require(&self, required: Role) -> Result<(), SdkError> {
        let effective = self.effective_role()?;
        if effective == required {
            Ok(())
        } else {
            Err(SdkError::Unauthorized {
                required,
                effective,
            })
        }
    }
}
