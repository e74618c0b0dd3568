// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The subscriber callback contract.
//!
//! **DDD Context:** Semantic Analysis
//!
//! A subscriber service may declare exactly three callbacks. Each accepts one
//! parameter type and returns one of a fixed set of types. The table is built
//! once per process and never changes afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Module prefix every contract type is qualified with.
pub const MODULE_PREFIX: &str = "websub";

/// Name of the annotation a subscriber service must carry.
pub const SERVICE_ANNOTATION: &str = "SubscriberServiceConfig";

pub const ON_SUBSCRIPTION_VERIFICATION: &str = "onSubscriptionVerification";
pub const ON_SUBSCRIPTION_VALIDATION_DENIED: &str = "onSubscriptionValidationDenied";
pub const ON_EVENT_NOTIFICATION: &str = "onEventNotification";

pub const SUBSCRIPTION_VERIFICATION: &str = "websub:SubscriptionVerification";
pub const SUBSCRIPTION_VERIFICATION_SUCCESS: &str = "websub:SubscriptionVerificationSuccess";
pub const SUBSCRIPTION_VERIFICATION_ERROR: &str = "websub:SubscriptionVerificationError";
pub const SUBSCRIPTION_DENIED_ERROR: &str = "websub:SubscriptionDeniedError";
pub const CONTENT_DISTRIBUTION_MESSAGE: &str = "websub:ContentDistributionMessage";
pub const ACKNOWLEDGEMENT: &str = "websub:Acknowledgement";
pub const SUBSCRIPTION_DELETED_ERROR: &str = "websub:SubscriptionDeletedError";

/// The rule for one callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackContract {
    pub name: &'static str,
    /// Qualified parameter types the callback may declare.
    pub parameter_types: &'static [&'static str],
    /// Qualified return types the callback may declare, in display order.
    pub return_types: &'static [&'static str],
    /// Whether the callback may omit its return type or return `()`.
    pub nil_return_allowed: bool,
}

impl CallbackContract {
    #[must_use]
    pub fn accepts_parameter(&self, qualified_name: &str) -> bool {
        self.parameter_types.contains(&qualified_name)
    }

    #[must_use]
    pub fn accepts_return(&self, qualified_name: &str) -> bool {
        self.return_types.contains(&qualified_name)
    }

    /// Return alternatives as printed in diagnostics: `A|B`.
    #[must_use]
    pub fn return_types_display(&self) -> String {
        self.return_types.join("|")
    }
}

/// Callback name → contract.
#[derive(Debug)]
pub struct ContractTable {
    callbacks: Vec<CallbackContract>,
    by_name: HashMap<&'static str, usize>,
}

static WEBSUB_CONTRACT: LazyLock<ContractTable> = LazyLock::new(ContractTable::build);

impl ContractTable {
    /// The process-wide subscriber contract.
    #[must_use]
    pub fn websub() -> &'static Self {
        &WEBSUB_CONTRACT
    }

    fn build() -> Self {
        let callbacks = vec![
            CallbackContract {
                name: ON_SUBSCRIPTION_VERIFICATION,
                parameter_types: &[SUBSCRIPTION_VERIFICATION],
                return_types: &[
                    SUBSCRIPTION_VERIFICATION_SUCCESS,
                    SUBSCRIPTION_VERIFICATION_ERROR,
                ],
                nil_return_allowed: false,
            },
            CallbackContract {
                name: ON_SUBSCRIPTION_VALIDATION_DENIED,
                parameter_types: &[SUBSCRIPTION_DENIED_ERROR],
                return_types: &[ACKNOWLEDGEMENT],
                nil_return_allowed: true,
            },
            CallbackContract {
                name: ON_EVENT_NOTIFICATION,
                parameter_types: &[CONTENT_DISTRIBUTION_MESSAGE],
                return_types: &[ACKNOWLEDGEMENT, SUBSCRIPTION_DELETED_ERROR],
                nil_return_allowed: true,
            },
        ];
        let by_name = callbacks
            .iter()
            .enumerate()
            .map(|(index, callback)| (callback.name, index))
            .collect();
        Self { callbacks, by_name }
    }

    /// Looks up a callback by its exact (case-sensitive) name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CallbackContract> {
        self.by_name.get(name).map(|&index| &self.callbacks[index])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Callbacks in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &CallbackContract> {
        self.callbacks.iter()
    }
}
