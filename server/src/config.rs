use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", about = "Serve the to-do app shell and its static assets")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "TODO_BIND", default_value = "127.0.0.1")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "TODO_PORT", default_value = "3000")]
    pub port: u16,

    /// Directory served for every path without its own route
    #[arg(long, env = "TODO_STATIC_DIR", default_value = "dist")]
    pub static_dir: PathBuf,

    /// URL prefix the static directory is mounted under
    #[arg(long, env = "TODO_STATIC_PREFIX", default_value = "/")]
    pub static_prefix: String,

    /// Application shell served at `/` (default: index.html in the static dir)
    #[arg(long, env = "TODO_INDEX")]
    pub index: Option<PathBuf>,

    /// Icon served at `/favicon.ico` (default: favicon.ico in the static dir)
    #[arg(long, env = "TODO_FAVICON")]
    pub favicon: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("static directory {} does not exist or is not a directory", .0.display())]
    StaticDirMissing(PathBuf),
    #[error("index file {} does not exist", .0.display())]
    IndexMissing(PathBuf),
    #[error("static prefix {0:?} must start with '/'")]
    InvalidPrefix(String),
}

impl ServerConfig {
    /// Defaults for everything except the static directory.
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            static_dir: static_dir.into(),
            static_prefix: "/".to_string(),
            index: None,
            favicon: None,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn index_path(&self) -> PathBuf {
        self.index
            .clone()
            .unwrap_or_else(|| self.static_dir.join("index.html"))
    }

    pub fn favicon_path(&self) -> PathBuf {
        self.favicon
            .clone()
            .unwrap_or_else(|| self.static_dir.join("favicon.ico"))
    }

    /// Prefix to nest the static directory under, or `None` when it is
    /// mounted at the root. Trailing slashes are ignored.
    pub fn mount_prefix(&self) -> Option<&str> {
        let prefix = self.static_prefix.trim_end_matches('/');
        if prefix.is_empty() {
            None
        } else {
            Some(prefix)
        }
    }

    /// Check paths before binding. A missing favicon is only a warning.
    pub fn validate(&self) -> Result<(), ServerError> {
        if !self.static_prefix.starts_with('/') {
            return Err(ServerError::InvalidPrefix(self.static_prefix.clone()));
        }
        if !self.static_dir.is_dir() {
            return Err(ServerError::StaticDirMissing(self.static_dir.clone()));
        }
        let index = self.index_path();
        if !index.is_file() {
            return Err(ServerError::IndexMissing(index));
        }
        let favicon = self.favicon_path();
        if !favicon.is_file() {
            warn!("favicon {} not found, /favicon.ico will return 404", favicon.display());
        }
        Ok(())
    }
}
