use crate::cli::OutputFormat;
use crate::utils::ui::Ui;
use std::sync::Arc;
use teamdeck_core::settings::PolicySettings;

/// AppContext provides access to shared application resources
pub struct AppContext {
    /// UI instance for managing terminal output
    pub ui: Arc<Ui>,
    /// Policy settings after applying command line overrides
    pub settings: PolicySettings,
    pub output: OutputFormat,
}

impl AppContext {
    pub fn new(ui: Arc<Ui>, settings: PolicySettings, output: OutputFormat) -> Self {
        AppContext {
            ui,
            settings,
            output,
        }
    }

    pub fn ui(&self) -> &Arc<Ui> {
        &self.ui
    }

    pub fn settings(&self) -> &PolicySettings {
        &self.settings
    }

    pub fn output(&self) -> OutputFormat {
        self.output
    }

    pub fn is_json(&self) -> bool {
        self.output == OutputFormat::Json
    }
}
