use std::io;

use liveloc_core::gateways::position::{
    PositionOptions, PositionSource, RawPositionError, POSITION_UNAVAILABLE, TIMEOUT,
};
use liveloc_entities::geo::Coordinate;
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::TcpStream,
};

use crate::json::GpsdReport;

pub const DEFAULT_GPSD_ADDRESS: &str = "127.0.0.1:2947";

const WATCH_COMMAND: &[u8] = b"?WATCH={\"enable\":true,\"json\":true};\n";

/// Reads the position from a [gpsd](https://gpsd.io) daemon.
///
/// gpsd streams live reports only, so every fix is fresh
/// regardless of the requested maximum age.
#[derive(Debug, Clone)]
pub struct Gpsd {
    addr: String,
}

impl Gpsd {
    pub fn new(addr: impl Into<String>) -> Self {
        Self { addr: addr.into() }
    }
}

impl Default for Gpsd {
    fn default() -> Self {
        Self::new(DEFAULT_GPSD_ADDRESS)
    }
}

fn unavailable(err: impl std::fmt::Display) -> RawPositionError {
    RawPositionError::coded(POSITION_UNAVAILABLE, err.to_string())
}

impl Gpsd {
    async fn read_fix(&self) -> Result<Coordinate, RawPositionError> {
        let stream = TcpStream::connect(&self.addr).await.map_err(|err| {
            if err.kind() == io::ErrorKind::ConnectionRefused {
                log::debug!("No gpsd listening on {}", self.addr);
                RawPositionError::NotSupported
            } else {
                unavailable(err)
            }
        })?;
        let (reader, mut writer) = stream.into_split();
        writer.write_all(WATCH_COMMAND).await.map_err(unavailable)?;
        let mut lines = BufReader::new(reader).lines();
        while let Some(line) = lines.next_line().await.map_err(unavailable)? {
            let report = match serde_json::from_str::<GpsdReport>(&line) {
                Ok(report) => report,
                Err(err) => {
                    log::debug!("Ignoring unexpected gpsd report: {err}");
                    continue;
                }
            };
            if let GpsdReport::Tpv(tpv) = report {
                if let Some(pos) = tpv.to_coordinate() {
                    return Ok(pos);
                }
                log::debug!("gpsd has no fix yet (mode {})", tpv.mode);
            }
        }
        Err(unavailable("gpsd closed the connection without a fix"))
    }
}

impl PositionSource for Gpsd {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinate, RawPositionError> {
        tokio::time::timeout(options.timeout, self.read_fix())
            .await
            .unwrap_or_else(|_| Err(RawPositionError::coded(TIMEOUT, "Timeout expired")))
    }
}
