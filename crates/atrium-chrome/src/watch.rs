//! Collection count subscriptions

use std::sync::{Arc, Weak};

use atrium_data::{Collection, SubscriptionId};

/// Live subscription that keeps a tab badge in sync. Unsubscribes on
/// [`CountWatch::release`] or drop.
pub struct CountWatch {
    tab: String,
    collection: Weak<dyn Collection>,
    subscription: Option<SubscriptionId>,
}

impl CountWatch {
    pub(crate) fn new(
        tab: &str,
        collection: &Arc<dyn Collection>,
        subscription: SubscriptionId,
    ) -> Self {
        Self {
            tab: tab.to_string(),
            collection: Arc::downgrade(collection),
            subscription: Some(subscription),
        }
    }

    pub fn tab(&self) -> &str {
        &self.tab
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn release(&mut self) {
        let Some(subscription) = self.subscription.take() else {
            return;
        };
        if let Some(collection) = self.collection.upgrade() {
            collection.unsubscribe(subscription);
            tracing::debug!(
                tab = %self.tab,
                collection = %collection.name(),
                "Released collection count watch"
            );
        }
    }
}

impl Drop for CountWatch {
    fn drop(&mut self) {
        self.release();
    }
}
