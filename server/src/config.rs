use error_stack::{Report, ResultExt};
use kernel::prelude::entity::UpdateStamp;
use kernel::KernelError;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

static HOST: &str = "BOOKSHELF_HOST";
static PORT: &str = "BOOKSHELF_PORT";
static LOG_DIR: &str = "BOOKSHELF_LOG_DIR";
static UPDATE_STAMP: &str = "BOOKSHELF_UPDATE_STAMP";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub log_dir: PathBuf,
    pub update_stamp: UpdateStamp,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 9000)),
            log_dir: PathBuf::from("./logs/"),
            update_stamp: UpdateStamp::default(),
        }
    }
}

impl ServerConfig {
    /// Reads the process environment, including a `.env` file when one exists.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> error_stack::Result<Self, KernelError> {
        let default = Self::default();

        let host = match lookup(HOST) {
            Some(host) => host
                .parse::<IpAddr>()
                .change_context_lazy(|| KernelError::Internal)
                .attach_printable_lazy(|| format!("{HOST} is not an ip address: {host}"))?,
            None => default.addr.ip(),
        };
        let port = match lookup(PORT) {
            Some(port) => port
                .parse::<u16>()
                .change_context_lazy(|| KernelError::Internal)
                .attach_printable_lazy(|| format!("{PORT} is not a port number: {port}"))?,
            None => default.addr.port(),
        };
        let log_dir = lookup(LOG_DIR).map(PathBuf::from).unwrap_or(default.log_dir);
        let update_stamp = match lookup(UPDATE_STAMP) {
            Some(stamp) => stamp.parse::<UpdateStamp>().map_err(|reason| {
                Report::new(KernelError::Internal)
                    .attach_printable(format!("{UPDATE_STAMP}: {reason}"))
            })?,
            None => default.update_stamp,
        };

        Ok(Self {
            addr: SocketAddr::new(host, port),
            log_dir,
            update_stamp,
        })
    }
}
