use super::payment::{Amount, PaymentMethod};
use crate::error::{PaymentError, Result};
use std::collections::HashMap;
use std::fmt;
use tracing::info;

/// Result of a simulated payment. No money moves; the message is the only effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub method: PaymentMethod,
    pub amount: Amount,
    pub message: String,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A payment strategy: turns an amount into a confirmation.
pub type Handler = Box<dyn Fn(Amount) -> Confirmation + Send + Sync>;

/// The stock handler for `method`.
pub fn simulated(method: PaymentMethod) -> Handler {
    Box::new(move |amount| Confirmation {
        method,
        amount,
        message: format!("Paid ${} via {}", amount, method),
    })
}

/// Maps each payment method to the handler that executes it.
///
/// New methods are supported by registering a handler; dispatch itself never
/// changes.
#[derive(Default)]
pub struct StrategyRegistry {
    handlers: HashMap<PaymentMethod, Handler>,
}

impl StrategyRegistry {
    /// Creates a registry with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the simulated handler for every known method.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for method in PaymentMethod::ALL {
            registry.register(method, simulated(method));
        }
        registry
    }

    /// Registers `handler` for `method`, replacing any previous one.
    pub fn register(&mut self, method: PaymentMethod, handler: Handler) {
        self.handlers.insert(method, handler);
    }

    pub fn is_registered(&self, method: PaymentMethod) -> bool {
        self.handlers.contains_key(&method)
    }

    /// Runs the handler registered for `method`.
    ///
    /// Fails with [`PaymentError::UnknownMethod`] if nothing is registered.
    pub fn execute(&self, method: PaymentMethod, amount: Amount) -> Result<Confirmation> {
        let handler = self
            .handlers
            .get(&method)
            .ok_or_else(|| PaymentError::unregistered(method))?;

        let confirmation = handler(amount);
        info!(method = ?method, amount = %amount, "payment executed");
        Ok(confirmation)
    }
}

/// Holds the currently selected method and pays through the registry.
pub struct PaymentContext<'a> {
    registry: &'a StrategyRegistry,
    selected: Option<PaymentMethod>,
}

impl<'a> PaymentContext<'a> {
    pub fn new(registry: &'a StrategyRegistry) -> Self {
        Self {
            registry,
            selected: None,
        }
    }

    pub fn set_strategy(&mut self, method: PaymentMethod) {
        self.selected = Some(method);
    }

    pub fn selected(&self) -> Option<PaymentMethod> {
        self.selected
    }

    pub fn pay(&self, amount: Amount) -> Result<Confirmation> {
        let method = self.selected.ok_or(PaymentError::NoStrategySet)?;
        self.registry.execute(method, amount)
    }
}
