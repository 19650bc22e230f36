//! CLI command implementations
//!
//! This module contains all CLI command implementations and the pieces
//! they share: input flags, adapter wiring and outcome printing.

pub mod calculate;
pub mod diagram;
pub mod document;
pub mod export_all;
pub mod init;
pub mod report;
pub mod validate;

use crate::adapters::assets::{AssetRegistry, HttpAssetSource};
use crate::adapters::calculation::{CalculationService, HttpCalculationClient};
use crate::adapters::download::DirectorySink;
use crate::config::{load_config_or_default, KhioneConfig};
use crate::core::export::{ExportOrchestrator, ExportOutcome};
use crate::core::session::Session;
use crate::domain::{CompressorModel, InputKey, KhioneError, Refrigerant, Result};
use clap::Args;
use std::sync::Arc;

/// Operating parameter flags shared by every command
///
/// Flags override the `[input]` section of the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Compressor model (e.g. KRS4115)
    #[arg(long)]
    pub model: Option<CompressorModel>,

    /// Refrigerant (e.g. Ammonia, R134a)
    #[arg(long)]
    pub refrigerant: Option<Refrigerant>,

    /// Evaporation temperature in °C
    #[arg(long, allow_hyphen_values = true)]
    pub evap_temp: Option<f64>,

    /// Condenser temperature in °C
    #[arg(long, allow_hyphen_values = true)]
    pub cond_temp: Option<f64>,

    /// Superheat in °C
    #[arg(long, allow_hyphen_values = true)]
    pub superheat: Option<f64>,

    /// Speed in RPM
    #[arg(long)]
    pub speed: Option<u32>,

    /// Raw edit applied after the other flags (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub edits: Vec<String>,
}

impl InputArgs {
    /// Apply the flags to a session as a sequence of edits
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed `--set` values or rejected
    /// edits.
    pub fn apply(&self, session: &mut Session) -> Result<()> {
        for (key, raw) in self.edit_list()? {
            session.apply_edit(&key, &raw)?;
        }
        Ok(())
    }

    fn edit_list(&self) -> Result<Vec<(String, String)>> {
        let mut edits = Vec::new();
        let mut push = |key: InputKey, value: Option<String>| {
            if let Some(value) = value {
                edits.push((key.as_str().to_string(), value));
            }
        };
        push(InputKey::Model, self.model.map(|m| m.to_string()));
        push(InputKey::Refrigerant, self.refrigerant.map(|r| r.to_string()));
        push(InputKey::EvapTemp, self.evap_temp.map(|v| v.to_string()));
        push(InputKey::CondTemp, self.cond_temp.map(|v| v.to_string()));
        push(InputKey::Superheat, self.superheat.map(|v| v.to_string()));
        push(InputKey::Speed, self.speed.map(|v| v.to_string()));

        for edit in &self.edits {
            let (key, value) = edit.split_once('=').ok_or_else(|| {
                KhioneError::Validation(format!("Expected KEY=VALUE, got '{edit}'"))
            })?;
            edits.push((key.trim().to_string(), value.trim().to_string()));
        }
        Ok(edits)
    }
}

/// Adapters and settings wired up from the configuration file
pub struct CommandContext {
    pub config: KhioneConfig,
    pub service: Arc<HttpCalculationClient>,
    pub orchestrator: ExportOrchestrator,
}

impl CommandContext {
    /// Load the configuration and build the HTTP adapters
    ///
    /// A missing configuration file falls back to defaults.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file is invalid or an HTTP
    /// client cannot be built.
    pub fn load(config_path: &str) -> Result<Self> {
        let config = load_config_or_default(config_path)?;
        tracing::debug!(
            backend = %config.backend.base_url,
            assets = %config.assets.base_url,
            output = %config.output.directory,
            "Configuration loaded"
        );

        let service = Arc::new(HttpCalculationClient::new(&config.backend)?);
        let orchestrator = ExportOrchestrator::new(
            service.clone(),
            Arc::new(HttpAssetSource::new(&config.assets)?),
            AssetRegistry::default(),
            Arc::new(DirectorySink::new(&config.output.directory)),
        );

        Ok(Self {
            config,
            service,
            orchestrator,
        })
    }

    /// Start a session from the configured input plus the command's flags
    ///
    /// # Errors
    ///
    /// Returns a validation error if any flag is rejected.
    pub fn session(&self, input: &InputArgs) -> Result<Session> {
        let mut session = Session::new(self.config.input.clone());
        input.apply(&mut session)?;
        Ok(session)
    }

    pub fn calculation_service(&self) -> &dyn CalculationService {
        self.service.as_ref()
    }
}

/// Load the context and session, printing failures the same way for every
/// command; `Err` carries the exit code
pub(crate) fn prepare(
    config_path: &str,
    input: &InputArgs,
) -> std::result::Result<(CommandContext, Session), i32> {
    let context = match CommandContext::load(config_path) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            println!("❌ Failed to load configuration file");
            println!("   Error: {e}");
            return Err(2); // Configuration error exit code
        }
    };

    match context.session(input) {
        Ok(session) => Ok((context, session)),
        Err(e) => {
            println!("❌ Invalid input");
            println!("   Error: {e}");
            Err(2)
        }
    }
}

/// Print one export outcome; returns whether it was saved
pub(crate) fn print_outcome(name: &str, outcome: &ExportOutcome) -> bool {
    match outcome {
        ExportOutcome::Saved { path } => {
            println!("✅ {name}: saved {}", path.display());
            true
        }
        ExportOutcome::Aborted(notice) => {
            println!("❌ {name}: {notice}");
            false
        }
    }
}
