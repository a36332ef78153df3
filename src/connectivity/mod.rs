use std::sync::atomic::{AtomicBool, Ordering};

/// Source of truth for "is the network reachable right now".
pub trait ConnectivityObserver {
    fn is_connected(&self) -> bool;
}

/// Connectivity flag flipped explicitly by the embedding application.
#[derive(Debug)]
pub struct ManualConnectivity {
    connected: AtomicBool,
}

impl ManualConnectivity {
    pub fn new(connected: bool) -> Self {
        Self {
            connected: AtomicBool::new(connected),
        }
    }

    /// Update the flag. Returns `true` only on an offline to online transition,
    /// which is when callers should fire a connectivity-restored trigger.
    pub fn set_connected(&self, connected: bool) -> bool {
        let was_connected = self.connected.swap(connected, Ordering::SeqCst);
        connected && !was_connected
    }
}

impl Default for ManualConnectivity {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ConnectivityObserver for ManualConnectivity {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_detected_once() {
        let connectivity = ManualConnectivity::new(false);
        assert!(!connectivity.is_connected());

        assert!(connectivity.set_connected(true));
        assert!(connectivity.is_connected());
        assert!(!connectivity.set_connected(true));
    }

    #[test]
    fn test_going_offline_is_not_a_restore() {
        let connectivity = ManualConnectivity::default();
        assert!(!connectivity.set_connected(false));
        assert!(!connectivity.is_connected());
    }
}
