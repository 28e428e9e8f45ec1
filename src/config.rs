use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub model: ModelConfig,
    pub input: InputConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Shape of the synthetic trial tensor, NHWC.
    pub shape: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Graph optimization level, 0 (disabled) to 3.
    pub optimization_level: u8,
    pub intra_threads: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: "models/movenet_lightning.onnx".to_string(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            shape: vec![1, 192, 192, 3],
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            optimization_level: 1,
            intra_threads: 1,
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            input: InputConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

impl ProbeConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let content = fs::read_to_string(path)?;
            // Missing fields fall back to their defaults via #[serde(default)]
            match serde_json::from_str::<ProbeConfig>(&content) {
                Ok(c) => {
                    println!("Loaded configuration from {}", path.display());
                    c
                }
                Err(e) => {
                    println!("Error parsing config: {}. Loading defaults.", e);
                    Self::default()
                }
            }
        } else {
            println!(
                "Configuration file not found. Creating default at {}",
                path.display()
            );
            Self::default()
        };

        // Always save back so new fields are populated in the file
        config.save(path)?;

        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
