// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! An in-memory cache of execution state for market integrity.

use ahash::AHashMap;
use sextant_model::{
    events::AccountState,
    identifiers::{AccountId, ClientOrderId, VenueOrderId},
};

/// A common in-memory cache indexing execution identifiers and account state.
///
/// The cache maintains the bidirectional mapping between client order IDs and
/// venue order IDs used by execution clients to verify reconciliation
/// integrity.
#[derive(Debug, Default)]
pub struct Cache {
    client_order_ids: AHashMap<VenueOrderId, ClientOrderId>,
    venue_order_ids: AHashMap<ClientOrderId, VenueOrderId>,
    accounts: AHashMap<AccountId, AccountState>,
}

impl Cache {
    /// Creates a new empty [`Cache`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes the given `venue_order_id` with the given `client_order_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if `client_order_id` is already indexed with a
    /// different venue order ID and `overwrite` is false.
    pub fn add_venue_order_id(
        &mut self,
        client_order_id: &ClientOrderId,
        venue_order_id: &VenueOrderId,
        overwrite: bool,
    ) -> anyhow::Result<()> {
        if let Some(existing) = self.venue_order_ids.get(client_order_id) {
            if existing != venue_order_id && !overwrite {
                anyhow::bail!(
                    "Existing venue order ID {existing} for client order ID {client_order_id} \
                     does not match the given venue order ID {venue_order_id}",
                );
            }
        }

        self.venue_order_ids
            .insert(*client_order_id, *venue_order_id);
        self.client_order_ids
            .insert(*venue_order_id, *client_order_id);
        Ok(())
    }

    /// Returns the venue order ID indexed for the given `client_order_id`.
    #[must_use]
    pub fn venue_order_id(&self, client_order_id: &ClientOrderId) -> Option<&VenueOrderId> {
        self.venue_order_ids.get(client_order_id)
    }

    /// Returns the client order ID indexed for the given `venue_order_id`.
    #[must_use]
    pub fn client_order_id(&self, venue_order_id: &VenueOrderId) -> Option<&ClientOrderId> {
        self.client_order_ids.get(venue_order_id)
    }

    /// Adds or replaces the latest account state for its account ID.
    pub fn add_account_state(&mut self, account_state: AccountState) {
        self.accounts
            .insert(account_state.account_id, account_state);
    }

    /// Returns the latest account state for the given `account_id`.
    #[must_use]
    pub fn account(&self, account_id: &AccountId) -> Option<&AccountState> {
        self.accounts.get(account_id)
    }

    /// Clears all cached state.
    pub fn reset(&mut self) {
        self.client_order_ids.clear();
        self.venue_order_ids.clear();
        self.accounts.clear();
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_add_and_resolve_venue_order_id() {
        let mut cache = Cache::new();
        let client_order_id = ClientOrderId::from("O-1");
        let venue_order_id = VenueOrderId::from("V-1");

        cache
            .add_venue_order_id(&client_order_id, &venue_order_id, false)
            .unwrap();

        assert_eq!(cache.venue_order_id(&client_order_id), Some(&venue_order_id));
        assert_eq!(cache.client_order_id(&venue_order_id), Some(&client_order_id));
    }

    #[rstest]
    fn test_add_venue_order_id_same_mapping_is_idempotent() {
        let mut cache = Cache::new();
        let client_order_id = ClientOrderId::from("O-1");
        let venue_order_id = VenueOrderId::from("V-1");

        cache
            .add_venue_order_id(&client_order_id, &venue_order_id, false)
            .unwrap();
        cache
            .add_venue_order_id(&client_order_id, &venue_order_id, false)
            .unwrap();
    }

    #[rstest]
    fn test_add_venue_order_id_conflict_errors() {
        let mut cache = Cache::new();
        let client_order_id = ClientOrderId::from("O-1");

        cache
            .add_venue_order_id(&client_order_id, &VenueOrderId::from("V-1"), false)
            .unwrap();
        let result =
            cache.add_venue_order_id(&client_order_id, &VenueOrderId::from("V-2"), false);

        assert!(result.unwrap_err().to_string().contains("does not match"));
    }

    #[rstest]
    fn test_add_venue_order_id_conflict_with_overwrite() {
        let mut cache = Cache::new();
        let client_order_id = ClientOrderId::from("O-1");

        cache
            .add_venue_order_id(&client_order_id, &VenueOrderId::from("V-1"), false)
            .unwrap();
        cache
            .add_venue_order_id(&client_order_id, &VenueOrderId::from("V-2"), true)
            .unwrap();

        assert_eq!(
            cache.venue_order_id(&client_order_id),
            Some(&VenueOrderId::from("V-2"))
        );
    }

    #[rstest]
    fn test_reset_clears_state() {
        let mut cache = Cache::new();
        let client_order_id = ClientOrderId::from("O-1");
        let venue_order_id = VenueOrderId::from("V-1");
        cache
            .add_venue_order_id(&client_order_id, &venue_order_id, false)
            .unwrap();

        cache.reset();
        assert!(cache.venue_order_id(&client_order_id).is_none());
        assert!(cache.client_order_id(&venue_order_id).is_none());
    }
}
