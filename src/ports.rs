//! Collaborators driven by the factory reset sequence.

/// Stored network credentials
pub trait NetworkConfigReset {
    /// Forget the stored network configuration
    fn reset_network_config(&mut self);
}

/// Stored accessory-protocol pairing state
pub trait PairingReset {
    /// Forget pairings and accessory keys
    fn reset_pairing(&mut self);
}

/// System control
pub trait SystemRestart {
    /// Restart the device.
    ///
    /// Does not return on hardware.
    fn restart(&mut self);
}
