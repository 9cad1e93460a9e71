//! # vagabond-core
//!
//! Drive the Vagrant CLI from Rust.
//!
//! Every command spawns the `vagrant` executable with `--machine-readable`,
//! decodes its stdout record by record and feeds each record to a typed
//! response as it arrives.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      vagabond-core                       │
//! ├──────────────────────────────────────────────────────────┤
//! │                                                          │
//! │  ┌─────────────────┐     ┌──────────────────────────┐   │
//! │  │ VagrantClient   │────▶│  UpCommand, Status...    │   │
//! │  │   - up()        │     │  (VagrantCommand)        │   │
//! │  │   - status()    │     └──────────────────────────┘   │
//! │  └─────────────────┘                │                   │
//! │                                     ▼                   │
//! │  ┌─────────────────┐     ┌──────────────────────────┐   │
//! │  │  Command<H>     │────▶│  vagrant <sub>           │   │
//! │  │  - init()       │     │    --machine-readable    │   │
//! │  │  - start()      │     └──────────────────────────┘   │
//! │  │  - wait()       │                │ stdout            │
//! │  └─────────────────┘                ▼                   │
//! │           ▲              ┌──────────────────────────┐   │
//! │           │              │  reader task             │   │
//! │           └──────────────│  decode_line -> H        │   │
//! │                          └──────────────────────────┘   │
//! │                                                          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use vagabond_core::{VagrantClient, VagrantCommand};
//!
//! # async fn example() -> vagabond_core::Result<()> {
//! let client = VagrantClient::new("/path/to/project")?;
//!
//! let mut status = client.status();
//! status.run().await?;
//! status.command().ensure_success()?;
//!
//! if let Some(resp) = status.response() {
//!     for (machine, state) in &resp.status {
//!         println!("{machine}: {state}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Streaming**: records reach the response while vagrant is still running
//! - **Typed Responses**: `up`, `status` and `version` expose parsed results
//! - **Custom Handlers**: any [`OutputHandler`] can consume a bare [`Command`]
//! - **Early Close**: stop reading output with [`Command::close_output`]

mod client;
mod command;
pub mod commands;
mod config;
mod error;
mod response;

pub use client::VagrantClient;
pub use command::{Command, CommandState, Invocation, MACHINE_READABLE_FLAG, MAX_LINE_BYTES};
pub use commands::{
    DestroyCommand, HaltCommand, ProvisionCommand, ReloadCommand, ResumeCommand, StatusCommand,
    SuspendCommand, UpCommand, VagrantCommand, VersionCommand,
};
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_VAGRANT_PATH, VAGRANTFILE};
pub use error::{Result, VagrantError};
pub use response::{
    ErrorResponse, StatusResponse, UpResponse, VersionResponse, VmInfo, ERROR_FIELD_SEPARATOR,
};
pub use vagabond_protocol::{self as protocol, OutputHandler, Record};
