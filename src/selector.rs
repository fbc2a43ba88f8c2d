use std::fmt;

use starknet::core::{types::Felt, utils::get_selector_from_name};

use crate::error::SelectorError;

/// An event name paired with its Starknet selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSelector {
    name: &'static str,
    selector: Felt,
}

impl EventSelector {
    /// Pairs `name` with its already derived `selector`.
    pub const fn new(name: &'static str, selector: Felt) -> Self {
        Self { name, selector }
    }

    /// The event name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The selector, i.e. the first key of the emitted event.
    pub const fn selector(&self) -> Felt {
        self.selector
    }
}

/// Formats as a report line, e.g. `JobCreated: 0x2f55...`. The selector is lowercase hex
/// without leading zeros.
impl fmt::Display for EventSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.selector.to_hex_string())
    }
}

/// Derives the selector of an event or entrypoint name (`sn_keccak` of the name).
pub fn derive_selector(name: &str) -> Result<Felt, SelectorError> {
    get_selector_from_name(name).map_err(|source| SelectorError::Derivation { name: name.to_string(), source })
}

/// Derives the selectors of all `names`, keeping their order. Stops at the first failure.
pub fn compute_selectors<F>(names: &[&'static str], derive: F) -> Result<Vec<EventSelector>, SelectorError>
where
    F: Fn(&str) -> Result<Felt, SelectorError>,
{
    let mut selectors = Vec::with_capacity(names.len());
    for &name in names {
        let selector = derive(name)?;
        tracing::debug!(event = name, selector = %selector.to_hex_string(), "derived event selector");
        selectors.push(EventSelector::new(name, selector));
    }
    Ok(selectors)
}
