use crate::config::{DemoSettings, OutputFormat};
use crate::utils::error::{ModelError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub demo: DemoSection,
    pub person: Option<PersonSection>,
    pub vehicle: Option<VehicleSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoSection {
    pub name: Option<String>,
    pub scenarios: Option<Vec<String>>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonSection {
    pub reference_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleSection {
    pub unit_factor: Option<f64>,
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ModelError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REF_YEAR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ModelError::ConfigParse {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn name(&self) -> &str {
        self.demo.name.as_deref().unwrap_or("oop-demo")
    }

    /// 將檔案內容套用到預設值上
    pub fn settings(&self) -> DemoSettings {
        let mut settings = DemoSettings::default();

        if let Some(scenarios) = &self.demo.scenarios {
            settings.scenarios = scenarios.clone();
        }
        if let Some(format) = self.demo.format {
            settings.format = format;
        }
        if let Some(year) = self.person.as_ref().and_then(|p| p.reference_year) {
            settings.reference_year = year;
        }
        if let Some(factor) = self.vehicle.as_ref().and_then(|v| v.unit_factor) {
            settings.unit_factor = factor;
        }

        settings
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.demo.name {
            validate_non_empty_string("demo.name", name)?;
        }
        if let Some(scenarios) = &self.demo.scenarios {
            if scenarios.is_empty() {
                return Err(ModelError::InvalidConfigValue {
                    field: "demo.scenarios".to_string(),
                    value: "[]".to_string(),
                    reason: "At least one scenario is required".to_string(),
                });
            }
        }
        self.settings().validate()
    }
}
