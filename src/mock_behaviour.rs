//! This module provides ways to tweak mocked storages, so that they can return errors on some tests

use crate::error::PersistenceError;

/// This stores some behaviour tweaks, that describe how a mocked storage will behave during a given test
///
/// So that a functions fails _n_ times after _m_ initial successes, set `(m, n)` for the suited parameter
#[derive(Default, Clone, Debug)]
pub struct MockBehaviour {
    /// If this is true, every action will be allowed
    pub is_suspended: bool,

    pub load_behaviour: (u32, u32),
    pub save_behaviour: (u32, u32),
}

impl MockBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    /// All actions will fail at once, for `n_fails` times
    pub fn fail_now(n_fails: u32) -> Self {
        Self {
            is_suspended: false,
            load_behaviour: (0, n_fails),
            save_behaviour: (0, n_fails),
        }
    }

    /// Saves will succeed `n_successes` times, then fail `n_fails` times
    pub fn fail_saves_after(n_successes: u32, n_fails: u32) -> Self {
        Self {
            save_behaviour: (n_successes, n_fails),
            ..Self::default()
        }
    }

    /// Suspend this mock behaviour until you call `resume`
    pub fn suspend(&mut self) {
        self.is_suspended = true;
    }
    /// Make this behaviour active again
    pub fn resume(&mut self) {
        self.is_suspended = false;
    }

    pub fn can_load(&mut self) -> Result<(), PersistenceError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.load_behaviour, "load")
    }
    pub fn can_save(&mut self) -> Result<(), PersistenceError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.save_behaviour, "save")
    }
}


/// Return Ok(()) in case the value is `(1+, _)` or `(_, 0)`, or return Err and decrement otherwise
fn decrement(value: &mut (u32, u32), descr: &str) -> Result<(), PersistenceError> {
    let remaining_successes = value.0;
    let remaining_failures = value.1;

    if remaining_successes > 0 {
        value.0 -= 1;
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    } else if remaining_failures > 0 {
        value.1 -= 1;
        log::debug!("Mock behaviour: failing a {} ({:?})", descr, value);
        Err(PersistenceError::Unavailable(format!("Mocked behaviour requires this {} to fail this time. ({:?})", descr, value)))
    } else {
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    }
}
