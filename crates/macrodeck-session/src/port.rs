//! Random open-port selection.

use crate::random::SharedRng;
use macrodeck_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io;
use std::net::{Ipv4Addr, TcpListener};
use tracing::{debug, info};

pub const DEFAULT_PORT_LOW: u16 = 4000;
pub const DEFAULT_PORT_HIGH: u16 = 20000;

/// Inclusive range of candidate ports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRange {
    low: u16,
    high: u16,
}

impl Default for PortRange {
    fn default() -> Self {
        Self {
            low: DEFAULT_PORT_LOW,
            high: DEFAULT_PORT_HIGH,
        }
    }
}

impl PortRange {
    pub fn new(low: u16, high: u16) -> Result<Self> {
        if low == 0 || low > high {
            return Err(Error::ConfigError(format!(
                "invalid port range {}-{}",
                low, high
            )));
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> u16 {
        self.low
    }

    pub fn high(&self) -> u16 {
        self.high
    }

    pub fn contains(&self, port: u16) -> bool {
        (self.low..=self.high).contains(&port)
    }

    fn pick(&self, rng: &SharedRng) -> u16 {
        rng.in_range(self.low, self.high)
    }
}

/// Bind-and-release probe on all interfaces.
pub fn probe_bind(port: u16) -> io::Result<()> {
    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))?;
    drop(listener);
    Ok(())
}

/// Pick random ports from `range` until one can be bound. Does not return
/// while every port in the range is taken.
pub fn find_open_port(range: PortRange, rng: &SharedRng) -> u16 {
    find_open_port_with(range, rng, probe_bind)
}

/// [`find_open_port`] with a caller-supplied probe.
pub fn find_open_port_with(
    range: PortRange,
    rng: &SharedRng,
    mut probe: impl FnMut(u16) -> io::Result<()>,
) -> u16 {
    let mut attempts: u64 = 0;
    loop {
        let port = range.pick(rng);
        attempts += 1;
        match probe(port) {
            Ok(()) => {
                info!("Selected port {} after {} attempt(s)", port, attempts);
                return port;
            }
            Err(e) => debug!("Port {} unavailable: {}", port, e),
        }
    }
}

/// Runs the blocking probe loop off the async runtime.
pub async fn find_open_port_async(range: PortRange, rng: SharedRng) -> Result<u16> {
    tokio::task::spawn_blocking(move || find_open_port(range, &rng))
        .await
        .map_err(|e| Error::Internal(format!("port probe task failed: {}", e)))
}
